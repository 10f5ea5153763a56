// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

pub mod base64;
pub mod hex;
pub mod jwt;
pub mod url;

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Jwt,
    Url,
    Base64,
    Base64Url,
    Hex,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Jwt => "jwt",
            Encoding::Url => "url",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Hex => "hex",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accepted interpretation of a candidate value. A candidate that
/// no detector accepts produces no `Detection` at all rather than a
/// zero-score one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub encoding: Encoding,
    pub decoded: String,
    pub score: f64,
}

/// Closed set of detectors. Extending the panel means adding a variant here
/// and a slot in the default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    Jwt,
    UrlPercent,
    Base64Like,
    Hex,
}

impl DetectorKind {
    pub fn detect(&self, value: &str) -> Option<Detection> {
        match self {
            DetectorKind::Jwt => jwt::detect(value),
            DetectorKind::UrlPercent => url::detect(value),
            DetectorKind::Base64Like => base64::detect(value),
            DetectorKind::Hex => hex::detect(value),
        }
    }
}

/// Ordered detector panel. The order doubles as the tie-break rule: a later
/// detector replaces an earlier result only with a strictly greater score.
#[derive(Debug, Clone)]
pub struct Panel {
    order: Vec<DetectorKind>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            order: vec![
                DetectorKind::Jwt,
                DetectorKind::UrlPercent,
                DetectorKind::Base64Like,
                DetectorKind::Hex,
            ],
        }
    }

    pub fn with_order(order: Vec<DetectorKind>) -> Self {
        Self { order }
    }

    pub fn detect_best(&self, value: &str) -> Option<Detection> {
        self.order
            .iter()
            .fold(None, |best, kind| match (best, kind.detect(value)) {
                (None, candidate) => candidate,
                (Some(best), Some(candidate)) if candidate.score > best.score => Some(candidate),
                (best, _) => best,
            })
    }
}

/// Shannon entropy in bits per character over the character frequency of `s`.
pub(crate) fn shannon_entropy(s: &str) -> f64 {
    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    let length = s.chars().count() as f64;
    let mut entropy = 0.0;
    for count in freq.values() {
        let p = *count as f64 / length;
        entropy -= p * p.log2();
    }
    entropy
}

pub(crate) fn is_text_byte(b: u8) -> bool {
    b.is_ascii_graphic() || b == b' ' || b == b'\n' || b == b'\r' || b == b'\t'
}

pub(crate) fn printable_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let printable = data.iter().filter(|&&b| is_text_byte(b)).count();
    printable as f64 / data.len() as f64
}

pub(crate) fn is_json_object(s: &str) -> bool {
    s.starts_with('{') && s.ends_with('}')
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
