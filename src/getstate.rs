// File: getstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Shared scan counters. Atomics so workers can bump tallies through an
/// `Arc` without a lock.
#[derive(Debug, Default)]
pub struct GetState {
    total_requests: AtomicU64,
    successful_requests: AtomicU64,
    failed_requests: AtomicU64,
    start_time: AtomicU64,
    end_time: AtomicU64,
}

impl GetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&self) {
        self.successful_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_failure(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_total_requests(&self, total: u64) {
        self.total_requests.store(total, Ordering::Relaxed);
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    pub fn successful_requests(&self) -> u64 {
        self.successful_requests.load(Ordering::Relaxed)
    }

    pub fn failed_requests(&self) -> u64 {
        self.failed_requests.load(Ordering::Relaxed)
    }

    pub fn mark_start(&self) {
        self.start_time.store(now_millis(), Ordering::Relaxed);
    }

    pub fn mark_end(&self) {
        self.end_time.store(now_millis(), Ordering::Relaxed);
    }

    pub fn start_time(&self) -> u64 {
        self.start_time.load(Ordering::Relaxed)
    }

    pub fn end_time(&self) -> u64 {
        self.end_time.load(Ordering::Relaxed)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.end_time().saturating_sub(self.start_time())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let state = GetState::new();
        state.set_total_requests(3);
        state.add_success();
        state.add_success();
        state.add_failure();

        assert_eq!(state.total_requests(), 3);
        assert_eq!(state.successful_requests(), 2);
        assert_eq!(state.failed_requests(), 1);
    }

    #[test]
    fn test_elapsed_never_underflows() {
        let state = GetState::new();
        state.mark_end();
        assert!(state.elapsed_ms() > 0 || state.start_time() == 0);
        let fresh = GetState::new();
        assert_eq!(fresh.elapsed_ms(), 0);
    }
}
