// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;

use crate::config::ConfigParameter;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(
        short = 'u',
        long = "url",
        help = "Target URL (bare hosts are probed over https)"
    )]
    pub url: Option<String>,

    #[arg(
        short = 'i',
        long = "input-file",
        help = "File with one target per line"
    )]
    pub input_file: Option<String>,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(
        short = 'w',
        long = "workers",
        default_value_t = 10,
        help = "Concurrent fetch workers"
    )]
    pub workers: usize,

    #[arg(long = "json", help = "Batch mode: one JSON object per target")]
    pub json: bool,

    #[arg(
        short = 'o',
        long = "output-file",
        help = "Write a batch report to this file"
    )]
    pub output_file: Option<String>,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "text",
        help = "Report file format: text or json"
    )]
    pub format: String,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 's',
        long = "suppress-stats",
        help = "Suppress scan summary and statistics"
    )]
    pub suppress_stats: bool,
}

impl Cli {
    pub fn to_config(&self) -> ConfigParameter {
        let mut config = ConfigParameter::new();
        config.set_timeout(self.timeout);
        config.set_workers(self.workers);
        config.set_json(self.json);
        config.set_suppress_stats(self.suppress_stats);
        config.set_no_color(self.no_color);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rcooky"]);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.workers, 10);
        assert!(!cli.json);
        assert!(cli.url.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_to_config() {
        let cli = Cli::parse_from([
            "rcooky", "-u", "example.com", "-t", "5", "-w", "3", "--json", "-s",
        ]);
        let config = cli.to_config();

        assert_eq!(config.timeout(), 5);
        assert_eq!(config.workers(), 3);
        assert!(config.json());
        assert!(config.suppress_stats());
        assert_eq!(cli.url.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_zero_workers_clamped_in_config() {
        let cli = Cli::parse_from(["rcooky", "-w", "0"]);
        assert_eq!(cli.to_config().workers(), 1);
    }
}
