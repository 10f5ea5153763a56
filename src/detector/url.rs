// File: url.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{Detection, Encoding};

/// Percent-encoding check with query-string semantics: every `%` must start
/// a two-hex-digit escape and `+` reads as a space. The score rewards strings
/// where a larger share of the characters are `%XY` escape sequences.
pub fn detect(value: &str) -> Option<Detection> {
    if !value.contains('%') {
        return None;
    }

    let escapes = count_escapes(value)?;
    let decoded = urlencoding::decode(&value.replace('+', " "))
        .ok()?
        .into_owned();
    if decoded == value {
        return None;
    }

    let ratio = escapes as f64 / value.len() as f64;
    let score = (0.7 + ratio * 0.29).min(0.99);

    Some(Detection {
        encoding: Encoding::Url,
        decoded,
        score,
    })
}

/// Counts `%XY` escapes, rejecting the whole value on any truncated or
/// non-hex escape.
fn count_escapes(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    let mut escapes = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return None;
            }
            escapes += 1;
            i += 3;
        } else {
            i += 1;
        }
    }
    Some(escapes)
}
