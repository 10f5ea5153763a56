// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#[derive(Debug, Clone, Copy)]
pub struct ConfigParameter {
    timeout: u64,
    workers: usize,
    json: bool,
    suppress_stats: bool,
    no_color: bool,
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParameter {
    pub fn new() -> Self {
        Self {
            timeout: 10,
            workers: 10,
            json: false,
            suppress_stats: false,
            no_color: false,
        }
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_workers(&mut self, workers: usize) {
        self.workers = workers.max(1);
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn set_json(&mut self, json: bool) {
        self.json = json;
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn set_suppress_stats(&mut self, suppress_stats: bool) {
        self.suppress_stats = suppress_stats;
    }

    pub fn suppress_stats(&self) -> bool {
        self.suppress_stats
    }

    pub fn set_no_color(&mut self, no_color: bool) {
        self.no_color = no_color;
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
