// File: base64.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{is_json_object, printable_ratio, shannon_entropy, Detection, Encoding};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

static BASE64_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/=_-]+$").unwrap());

/// Base64 and Base64URL check, entropy-gated to keep short repetitive words
/// from matching. The first decode variant that succeeds names the encoding.
pub fn detect(value: &str) -> Option<Detection> {
    if value.len() < 8 {
        return None;
    }

    if !BASE64_CHARS.is_match(value) {
        return None;
    }

    let (decoded, encoding) = try_variants(value)?;
    if decoded.is_empty() {
        return None;
    }

    if !printable_with_structure(&decoded) {
        return None;
    }

    let entropy = shannon_entropy(value);
    if entropy < 3.5 {
        return None;
    }

    let decoded = String::from_utf8_lossy(&decoded).into_owned();
    let score = score_match(value, &decoded, entropy);
    if score < 0.5 {
        return None;
    }

    Some(Detection {
        encoding,
        decoded,
        score,
    })
}

fn try_variants(value: &str) -> Option<(Vec<u8>, Encoding)> {
    let mut padded = value.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }

    if let Ok(bytes) = STANDARD.decode(&padded) {
        return Some((bytes, Encoding::Base64));
    }
    if let Ok(bytes) = URL_SAFE.decode(&padded) {
        return Some((bytes, Encoding::Base64Url));
    }
    if let Ok(bytes) = STANDARD_NO_PAD.decode(value) {
        return Some((bytes, Encoding::Base64));
    }
    if let Ok(bytes) = URL_SAFE_NO_PAD.decode(value) {
        return Some((bytes, Encoding::Base64Url));
    }
    None
}

/// Accepts decoded bytes that are overwhelmingly printable and either carry
/// structural characters or are dominated by alphanumerics.
fn printable_with_structure(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }

    if printable_ratio(data) < 0.9 {
        return false;
    }

    let text = String::from_utf8_lossy(data);
    if text.starts_with('{')
        || text.starts_with('[')
        || text.contains('=')
        || text.contains('&')
        || text.contains(':')
        || text.contains('|')
    {
        return true;
    }

    let alphanumeric = data.iter().filter(|b| b.is_ascii_alphanumeric()).count();
    alphanumeric as f64 / data.len() as f64 > 0.3
}

fn score_match(original: &str, decoded: &str, entropy: f64) -> f64 {
    let mut score: f64 = 0.5;

    if original.len() >= 20 {
        score += 0.15;
    }

    if entropy > 4.5 {
        score += 0.15;
    } else if entropy > 4.0 {
        score += 0.10;
    }

    if is_json_object(decoded) {
        score += 0.2;
    } else if decoded.contains('=') && decoded.contains('&') {
        score += 0.15;
    } else if decoded.contains(':') {
        score += 0.1;
    }

    score.min(0.99)
}
