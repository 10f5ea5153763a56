// File: report.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::fetcher::FetchResult;
use std::fs::File;
use std::io::{Error, ErrorKind, Result, Write};

pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "json" => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate_report(
        results: &[FetchResult],
        output_path: &str,
        format: ReportFormat,
    ) -> Result<()> {
        match format {
            ReportFormat::Text => Self::generate_text_report(results, output_path),
            ReportFormat::Json => Self::generate_json_report(results, output_path),
        }
    }

    pub fn generate_text_report(results: &[FetchResult], output_path: &str) -> Result<()> {
        let mut file = File::create(output_path)?;
        for result in results {
            if let Some(error) = &result.error {
                writeln!(file, "{} ERROR {}", result.url, error)?;
                continue;
            }

            let cookies: Vec<String> = result
                .cookies
                .iter()
                .map(|c| match &c.encoding {
                    Some(encoding) => format!("{}[{}]", c.name, encoding),
                    None => c.name.clone(),
                })
                .collect();
            writeln!(
                file,
                "{} [{} cookies] {}",
                result.url,
                result.cookies.len(),
                cookies.join(", ")
            )?;
        }
        Ok(())
    }

    pub fn generate_json_report(results: &[FetchResult], output_path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(results)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        let mut file = File::create(output_path)?;
        writeln!(file, "{}", json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
