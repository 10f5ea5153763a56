// File: analyzer.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detector::{Encoding, Panel};
use serde::Serialize;

/// One record per observed Set-Cookie header. The optional fields are
/// populated only when a detector accepted the value; the record is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Cookie {
    /// True when a detector matched and produced output that actually
    /// differs from the raw value. Coincidental matches that decode to the
    /// original string are uninformative and treated as plain cookies.
    pub fn is_decoded(&self) -> bool {
        self.encoding.is_some()
            && self
                .decoded
                .as_deref()
                .is_some_and(|decoded| !decoded.is_empty() && decoded != self.value)
    }
}

pub struct Analyzer {
    panel: Panel,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            panel: Panel::new(),
        }
    }

    pub fn with_panel(panel: Panel) -> Self {
        Self { panel }
    }

    /// Always returns a record; detection failure just leaves the optional
    /// fields empty.
    pub fn analyze(&self, name: &str, value: &str) -> Cookie {
        let mut cookie = Cookie {
            name: name.to_string(),
            value: value.to_string(),
            encoding: None,
            decoded: None,
            score: None,
        };

        if let Some(result) = self.panel.detect_best(value) {
            cookie.encoding = Some(result.encoding);
            cookie.decoded = Some(result.decoded);
            cookie.score = Some(result.score);
        }

        cookie
    }
}

/// Splits a raw Set-Cookie header into its name/value pair, dropping
/// attributes after the first `;`. A header without `=` yields an empty
/// value; a header without a name yields `None`.
pub fn parse_set_cookie(raw: &str) -> Option<(String, String)> {
    let pair = raw.split(';').next().unwrap_or_default().trim();
    let mut kv = pair.splitn(2, '=');
    let name = kv.next().unwrap_or_default();
    if name.is_empty() {
        return None;
    }
    let value = kv.next().unwrap_or_default();
    Some((name.to_string(), value.to_string()))
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
