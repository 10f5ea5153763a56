// File: hex.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{is_json_object, printable_ratio, shannon_entropy, Detection, Encoding};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());

/// Hex check. Mixed-case hex letters are treated as noise, not data.
pub fn detect(value: &str) -> Option<Detection> {
    if value.len() < 16 || value.len() % 2 != 0 {
        return None;
    }

    if !HEX_CHARS.is_match(value) {
        return None;
    }

    let has_lower = value.bytes().any(|b| (b'a'..=b'f').contains(&b));
    let has_upper = value.bytes().any(|b| (b'A'..=b'F').contains(&b));
    if has_lower && has_upper {
        return None;
    }

    let decoded = hex::decode(value).ok()?;
    if printable_ratio(&decoded) < 0.95 {
        return None;
    }

    let entropy = shannon_entropy(value);
    if entropy < 3.0 {
        return None;
    }

    let decoded = String::from_utf8_lossy(&decoded).into_owned();
    let score = score_match(value, &decoded, entropy);
    if score < 0.5 {
        return None;
    }

    Some(Detection {
        encoding: Encoding::Hex,
        decoded,
        score,
    })
}

fn score_match(original: &str, decoded: &str, entropy: f64) -> f64 {
    let mut score: f64 = 0.4;

    if original.len() >= 32 {
        score += 0.2;
    }

    if entropy > 3.5 {
        score += 0.15;
    }

    if is_json_object(decoded) {
        score += 0.25;
    } else if decoded.contains('=') || decoded.contains(':') {
        score += 0.15;
    }

    score.min(0.99)
}
