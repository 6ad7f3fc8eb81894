//! # Configuration Module / 配置模块
//!
//! This module defines the run configuration, loaded from an optional
//! `smoketest.toml` file and overridden per-field by command-line flags.
//! Every field has a sensible default, so the tool runs without any
//! configuration file at all.
//!
//! 此模块定义运行配置，从可选的 `smoketest.toml` 文件加载，
//! 并由命令行标志逐字段覆盖。每个字段都有合理的默认值，
//! 因此该工具完全可以在没有配置文件的情况下运行。

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::IssueCategory;

/// Default glob pattern: the macOS diagnostic report directory.
/// 默认 glob 模式：macOS 诊断报告目录。
pub fn default_log_pattern() -> String {
    "~/Library/Logs/DiagnosticReports/*.crash".to_string()
}

fn default_report_path() -> PathBuf {
    PathBuf::from("test_report.log")
}

fn default_interval_secs() -> u64 {
    10
}

fn default_grace_secs() -> u64 {
    2
}

fn default_launch_timeout_secs() -> u64 {
    30
}

fn default_launcher() -> String {
    "open".to_string()
}

fn default_error_keywords() -> Vec<String> {
    vec!["error".to_string()]
}

fn default_crash_keywords() -> Vec<String> {
    vec!["crash".to_string(), "segmentation fault".to_string()]
}

fn default_fail_keywords() -> Vec<String> {
    vec!["fail".to_string()]
}

/// The keyword families the scanner looks for, one list of
/// case-insensitive substrings per issue category.
///
/// 扫描器查找的关键字类别，每个问题类别对应一个不区分大小写的子串列表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keywords {
    #[serde(default = "default_error_keywords")]
    pub error: Vec<String>,
    #[serde(default = "default_crash_keywords")]
    pub crash: Vec<String>,
    #[serde(default = "default_fail_keywords")]
    pub fail: Vec<String>,
}

impl Keywords {
    /// All families in category order, used to build the matcher.
    pub fn families(&self) -> [(IssueCategory, &[String]); 3] {
        [
            (IssueCategory::Error, self.error.as_slice()),
            (IssueCategory::Crash, self.crash.as_slice()),
            (IssueCategory::Fail, self.fail.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_empty() && self.crash.is_empty() && self.fail.is_empty()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            error: default_error_keywords(),
            crash: default_crash_keywords(),
            fail: default_fail_keywords(),
        }
    }
}

/// The complete run configuration. Read-only for the duration of a run.
///
/// 完整的运行配置。在运行期间只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Glob pattern of log files to scan after each launch.
    /// 每次启动后要扫描的日志文件的 glob 模式。
    #[serde(default = "default_log_pattern")]
    pub log_pattern: String,

    /// Report file, appended to after every pass.
    /// 报告文件，每次运行后追加。
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Seconds between passes in continuous mode.
    /// 连续模式下两次运行之间的秒数。
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Seconds to wait after the launch before the liveness check and the
    /// log scan, so crashes have time to be written out.
    /// 启动后在存活检查和日志扫描之前等待的秒数，以便崩溃有时间被写出。
    #[serde(default = "default_grace_secs")]
    pub grace_secs: u64,

    /// Seconds to wait for the launcher to finish. A launcher still
    /// running afterwards means the application came up and stayed up.
    /// 等待启动器完成的秒数。超时后仍在运行的启动器意味着应用程序已启动并保持运行。
    #[serde(default = "default_launch_timeout_secs")]
    pub launch_timeout_secs: u64,

    /// Command used to open the application bundle. The bundle path is
    /// appended as the final argument.
    /// 用于打开应用程序包的命令。包路径作为最后一个参数追加。
    #[serde(default = "default_launcher")]
    pub launcher: String,

    /// Number of log files scanned concurrently. Derived from the CPU
    /// count when unset.
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Keyword families to scan for / 要扫描的关键字类别
    #[serde(default)]
    pub keywords: Keywords,
}

impl SmokeConfig {
    /// Effective scan concurrency.
    pub fn scan_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| num_cpus::get() / 2 + 1)
    }
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            log_pattern: default_log_pattern(),
            report_path: default_report_path(),
            interval_secs: default_interval_secs(),
            grace_secs: default_grace_secs(),
            launch_timeout_secs: default_launch_timeout_secs(),
            launcher: default_launcher(),
            jobs: None,
            keywords: Keywords::default(),
        }
    }
}

/// Loads a configuration file, failing with context when the file is
/// missing or malformed.
pub fn load_config(path: &Path) -> Result<SmokeConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
}

/// Loads the configuration file if it exists. A missing file is only an
/// error when the user named it explicitly on the command line; the
/// default `smoketest.toml` is allowed to be absent.
pub fn load_or_default(path: &Path, explicit: bool) -> Result<SmokeConfig> {
    if path.exists() {
        load_config(path)
    } else if explicit {
        bail!("Configuration file not found: {}", path.display());
    } else {
        Ok(SmokeConfig::default())
    }
}
