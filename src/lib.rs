// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod fetcher;
pub mod getstate;
pub mod report;
