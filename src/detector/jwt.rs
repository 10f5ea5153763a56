// File: jwt.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{is_json_object, Detection, Encoding};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENT_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Structural JWT check: three dot-separated segments, the first two being
/// unpadded URL-safe Base64 that decodes to JSON-object-shaped text. The
/// signature segment is left as-is since it is rarely printable.
pub fn detect(value: &str) -> Option<Detection> {
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    if parts.iter().any(|p| p.len() < 10) {
        return None;
    }

    if !SEGMENT_CHARS.is_match(parts[0]) || !SEGMENT_CHARS.is_match(parts[1]) {
        return None;
    }

    let header = decode_segment(parts[0])?;
    let payload = decode_segment(parts[1])?;

    if !header.contains("\"alg\"") && !header.contains("\"typ\"") {
        return None;
    }

    if !is_json_object(&header) || !is_json_object(&payload) {
        return None;
    }

    Some(Detection {
        encoding: Encoding::Jwt,
        decoded: format!("{}.{}.{}", header, payload, parts[2]),
        score: 0.99,
    })
}

fn decode_segment(segment: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    String::from_utf8(bytes).ok()
}
