//! # Config Module Unit Tests / 配置模块单元测试
//!
//! Unit tests for loading and defaulting the run configuration.
//!
//! 加载运行配置及其默认值的单元测试。

use smoke_runner::core::config::{self, Keywords, SmokeConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod defaults_tests {
    use super::*;

    #[test]
    fn test_built_in_defaults() {
        let config = SmokeConfig::default();

        assert_eq!(
            config.log_pattern,
            "~/Library/Logs/DiagnosticReports/*.crash"
        );
        assert_eq!(config.report_path, PathBuf::from("test_report.log"));
        assert_eq!(config.interval_secs, 10);
        assert_eq!(config.grace_secs, 2);
        assert_eq!(config.launch_timeout_secs, 30);
        assert_eq!(config.launcher, "open");
        assert!(config.jobs.is_none());
    }

    #[test]
    fn test_default_keyword_families() {
        let keywords = Keywords::default();

        assert_eq!(keywords.error, vec!["error"]);
        assert_eq!(keywords.crash, vec!["crash", "segmentation fault"]);
        assert_eq!(keywords.fail, vec!["fail"]);
        assert!(!keywords.is_empty());
    }

    #[test]
    fn test_scan_jobs_is_always_positive() {
        let config = SmokeConfig::default();
        assert!(config.scan_jobs() >= 1);

        let pinned = SmokeConfig {
            jobs: Some(3),
            ..SmokeConfig::default()
        };
        assert_eq!(pinned.scan_jobs(), 3);
    }
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_empty_document_parses_to_defaults() {
        let config: SmokeConfig = toml::from_str("").unwrap();
        assert_eq!(config.interval_secs, SmokeConfig::default().interval_secs);
        assert_eq!(config.launcher, "open");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config: SmokeConfig = toml::from_str(
            r#"
            log_pattern = "/var/log/myapp/*.log"
            interval_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.log_pattern, "/var/log/myapp/*.log");
        assert_eq!(config.interval_secs, 30);
        assert_eq!(config.grace_secs, 2);
        assert_eq!(config.launcher, "open");
    }

    #[test]
    fn test_partial_keywords_keep_missing_families_default() {
        let config: SmokeConfig = toml::from_str(
            r#"
            [keywords]
            error = ["panic", "error"]
            "#,
        )
        .unwrap();

        assert_eq!(config.keywords.error, vec!["panic", "error"]);
        assert_eq!(
            config.keywords.crash,
            vec!["crash", "segmentation fault"]
        );
        assert_eq!(config.keywords.fail, vec!["fail"]);
    }

    #[test]
    fn test_invalid_toml_is_an_error_with_the_path_in_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "interval_secs = \"not a number\"").unwrap();

        let err = config::load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }
}

#[cfg(test)]
mod load_or_default_tests {
    use super::*;

    #[test]
    fn test_missing_default_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("smoketest.toml");

        let config = config::load_or_default(&path, false).unwrap();
        assert_eq!(config.launcher, "open");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elsewhere.toml");

        assert!(config::load_or_default(&path, true).is_err());
    }

    #[test]
    fn test_existing_file_is_loaded_either_way() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("smoketest.toml");
        fs::write(&path, "launcher = \"open -W\"").unwrap();

        let config = config::load_or_default(&path, false).unwrap();
        assert_eq!(config.launcher, "open -W");

        let config = config::load_or_default(&path, true).unwrap();
        assert_eq!(config.launcher, "open -W");
    }
}

#[cfg(test)]
mod template_tests {
    use super::*;
    use smoke_runner::cli::commands::init::DEFAULT_CONFIG;

    // The commented template written by `init --non-interactive` must
    // parse back to the built-in defaults, or the two drift apart.
    #[test]
    fn test_default_template_round_trips_to_defaults() {
        let parsed: SmokeConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        let defaults = SmokeConfig::default();

        assert_eq!(parsed.log_pattern, defaults.log_pattern);
        assert_eq!(parsed.report_path, defaults.report_path);
        assert_eq!(parsed.interval_secs, defaults.interval_secs);
        assert_eq!(parsed.grace_secs, defaults.grace_secs);
        assert_eq!(parsed.launch_timeout_secs, defaults.launch_timeout_secs);
        assert_eq!(parsed.launcher, defaults.launcher);
        assert_eq!(parsed.keywords.error, defaults.keywords.error);
        assert_eq!(parsed.keywords.crash, defaults.keywords.crash);
        assert_eq!(parsed.keywords.fail, defaults.keywords.fail);
    }
}
