// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use colored::Colorize;
use log::{error, LevelFilter};
use rcooky::cli::Cli;
use rcooky::fetcher::{CookieEvent, Fetcher};
use rcooky::getstate::GetState;
use rcooky::report::{ReportFormat, ReportGenerator};
use simple_logger::SimpleLogger;
use std::io::{self, BufRead, IsTerminal};
use std::process;
use std::str::FromStr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Warn);
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to initialize logger: {}", e);
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let targets = collect_targets(&cli);
    if targets.is_empty() {
        eprintln!("usage: rcooky -u <url> or pipe targets via stdin");
        process::exit(1);
    }

    let config = cli.to_config();
    let state = Arc::new(GetState::new());
    state.set_total_requests(targets.len() as u64);
    state.mark_start();

    let fetcher = match Fetcher::new(&config, Arc::clone(&state)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("failed to build HTTP client: {}", e);
            process::exit(1);
        }
    };

    if config.json() {
        let results = fetcher.fetch_many(&targets).await;
        for result in &results {
            match serde_json::to_string(result) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("failed to serialize result for {}: {}", result.url, e),
            }
        }

        if let Some(path) = &cli.output_file {
            let format = ReportFormat::from_name(&cli.format);
            if let Err(e) = ReportGenerator::generate_report(&results, path, format) {
                error!("failed to write report to {}: {}", path, e);
            }
        }
    } else {
        let mut stream = fetcher.fetch_stream(&targets);
        while let Some(event) = stream.recv().await {
            match event {
                CookieEvent::Decoded { cookie, .. } => {
                    let tag = format!("[{}]", cookie.encoding.map_or("?", |e| e.as_str()));
                    println!(
                        "{} {} {} {}",
                        tag.purple().bold(),
                        cookie.value,
                        "→".green().bold(),
                        cookie.decoded.unwrap_or_default().green()
                    );
                }
                CookieEvent::Failed { url, error } => {
                    eprintln!("{}", format!("{}: {}", url, error).red());
                }
            }
        }
    }

    state.mark_end();
    if !config.suppress_stats() {
        eprintln!(
            "{} requests in {} ms. Successful: {}. Failed: {}.",
            state.total_requests(),
            state.elapsed_ms(),
            state.successful_requests(),
            state.failed_requests()
        );
    }
}

/// Targets come from the `-u` flag, an input file, and piped stdin, in that
/// order. Blank lines and `#` comments are skipped.
fn collect_targets(cli: &Cli) -> Vec<String> {
    let mut targets = Vec::new();

    if let Some(url) = &cli.url {
        targets.push(url.clone());
    }

    if let Some(path) = &cli.input_file {
        match std::fs::read_to_string(path) {
            Ok(content) => targets.extend(filter_lines(content.lines().map(str::to_string))),
            Err(e) => {
                eprintln!("cannot read {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let lines = stdin.lock().lines().map_while(|l| l.ok());
        targets.extend(filter_lines(lines));
    }

    targets
}

fn filter_lines(lines: impl Iterator<Item = String>) -> Vec<String> {
    lines
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
