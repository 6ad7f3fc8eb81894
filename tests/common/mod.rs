//! Shared helpers for the integration test suite.
//! 集成测试套件的共享辅助功能。

#![allow(dead_code)]

use smoke_runner::core::config::{Keywords, SmokeConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// A configuration that works on any developer machine or CI box:
/// the launcher is the no-op `true` command, there are no waits, and all
/// paths stay inside the given scratch directory.
pub fn quiet_config(dir: &Path) -> SmokeConfig {
    SmokeConfig {
        log_pattern: dir.join("logs").join("*.log").display().to_string(),
        report_path: dir.join("test_report.log"),
        interval_secs: 0,
        grace_secs: 0,
        launch_timeout_secs: 5,
        launcher: "true".to_string(),
        jobs: Some(2),
        keywords: Keywords::default(),
    }
}

/// Creates `<dir>/logs/<name>` with the given contents and returns its
/// path.
pub fn write_log(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let logs_dir = dir.join("logs");
    fs::create_dir_all(&logs_dir).unwrap();
    let path = logs_dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Creates a fake application bundle (a directory ending in `.app`) and
/// returns its path. Launching it with the `true` launcher succeeds.
pub fn fake_app(dir: &Path) -> PathBuf {
    let app = dir.join("Sample.app");
    fs::create_dir_all(&app).unwrap();
    app
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
