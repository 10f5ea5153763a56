// File: config_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::config::ConfigParameter;
    use rstest::*;

    #[test]
    fn test_config_parameter_default() {
        let config = ConfigParameter::default();

        assert_eq!(config.timeout(), 10);
        assert_eq!(config.workers(), 10);
        assert_eq!(config.json(), false);
        assert_eq!(config.suppress_stats(), false);
        assert_eq!(config.no_color(), false);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(30)]
    #[case(120)]
    fn test_set_timeout(#[case] timeout_value: u64) {
        let mut config = ConfigParameter::new();
        config.set_timeout(timeout_value);
        assert_eq!(config.timeout(), timeout_value);
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    #[case(64)]
    fn test_set_workers(#[case] workers: usize) {
        let mut config = ConfigParameter::new();
        config.set_workers(workers);
        assert_eq!(config.workers(), workers);
    }

    #[test]
    fn test_set_workers_clamps_zero() {
        let mut config = ConfigParameter::new();
        config.set_workers(0);
        assert_eq!(config.workers(), 1);
    }

    #[test]
    fn test_flag_setters() {
        let mut config = ConfigParameter::new();

        config.set_json(true);
        config.set_suppress_stats(true);
        config.set_no_color(true);

        assert!(config.json());
        assert!(config.suppress_stats());
        assert!(config.no_color());
    }
}
