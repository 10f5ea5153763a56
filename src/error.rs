// File: error.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use thiserror::Error;

/// Per-fetch failure. Either kind is fatal to its own fetch only; a failing
/// URL never aborts the rest of a batch. Detector decode failures are not
/// errors at all, they are the "no match" branch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    Request(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
