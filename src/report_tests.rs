// File: report_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::analyzer::Cookie;
    use crate::detector::Encoding;
    use crate::fetcher::FetchResult;
    use crate::report::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_results() -> Vec<FetchResult> {
        vec![
            FetchResult {
                url: "https://example.com".to_string(),
                cookies: vec![
                    Cookie {
                        name: "session".to_string(),
                        value: "abc123".to_string(),
                        encoding: None,
                        decoded: None,
                        score: None,
                    },
                    Cookie {
                        name: "data".to_string(),
                        value: "aGVsbG8td29ybGQ6dGVzdA==".to_string(),
                        encoding: Some(Encoding::Base64),
                        decoded: Some("hello-world:test".to_string()),
                        score: Some(0.75),
                    },
                ],
                error: None,
            },
            FetchResult {
                url: "https://failed.com".to_string(),
                cookies: vec![],
                error: Some("request failed: connection refused".to_string()),
            },
        ]
    }

    fn create_temp_file(name: &str) -> (TempDir, String) {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(name).to_string_lossy().to_string();
        (temp_dir, file_path)
    }

    #[test]
    fn test_generate_text_report() {
        let (_temp_dir, file_path) = create_temp_file("report.txt");
        let results = create_test_results();

        ReportGenerator::generate_text_report(&results, &file_path).unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "https://example.com [2 cookies] session, data[base64]"
        );
        assert_eq!(
            lines[1],
            "https://failed.com ERROR request failed: connection refused"
        );
    }

    #[test]
    fn test_generate_json_report() {
        let (_temp_dir, file_path) = create_temp_file("report.json");
        let results = create_test_results();

        ReportGenerator::generate_json_report(&results, &file_path).unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["url"], "https://example.com");
        assert_eq!(entries[0]["cookies"][1]["encoding"], "base64");
        assert_eq!(
            entries[1]["error"],
            "request failed: connection refused"
        );
        assert!(entries[1].get("cookies").is_none());
    }

    #[test]
    fn test_format_from_name() {
        assert!(matches!(ReportFormat::from_name("json"), ReportFormat::Json));
        assert!(matches!(ReportFormat::from_name("JSON"), ReportFormat::Json));
        assert!(matches!(ReportFormat::from_name("text"), ReportFormat::Text));
        assert!(matches!(
            ReportFormat::from_name("anything"),
            ReportFormat::Text
        ));
    }

    #[test]
    fn test_generate_report_dispatch() {
        let (_temp_dir, file_path) = create_temp_file("report.out");
        let results = create_test_results();

        ReportGenerator::generate_report(&results, &file_path, ReportFormat::Json).unwrap();
        let content = fs::read_to_string(&file_path).unwrap();
        assert!(serde_json::from_str::<Value>(&content).is_ok());
    }
}
