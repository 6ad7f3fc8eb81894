//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the smoke
//! runner. It includes models for launch outcomes, issue records found in
//! log files, and the per-pass test report.
//!
//! 此模块定义了整个冒烟测试运行器中使用的核心数据结构。
//! 它包括启动结果、在日志文件中发现的问题记录以及每次运行的测试报告的模型。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The keyword family a scanned log line matched.
/// A line produces at most one issue; the category is decided by the
/// leftmost matching keyword in the line.
///
/// 扫描的日志行匹配到的关键字类别。
/// 每行最多产生一个问题；类别由该行中最靠左匹配的关键字决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// Something logged an error / 记录了一个错误
    Error,
    /// Evidence of a crash, e.g. a diagnostic report entry / 崩溃的证据，例如诊断报告条目
    Crash,
    /// An operation reported as failed / 报告为失败的操作
    Fail,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Error => "error",
            IssueCategory::Crash => "crash",
            IssueCategory::Fail => "fail",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log line matched against a configured keyword, surfaced as a
/// report line item. Issues have no lifecycle of their own; they exist
/// only inside the report that carries them.
///
/// 与配置的关键字匹配的单个日志行，作为报告行项目呈现。
/// 问题本身没有生命周期；它们只存在于承载它们的报告中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// The log file the line came from / 该行所在的日志文件
    pub file: PathBuf,
    /// 1-based line number within the file / 文件内从 1 开始的行号
    pub line: usize,
    /// The keyword family that matched / 匹配到的关键字类别
    pub category: IssueCategory,
    /// The matched line, trimmed / 匹配到的行（已去除首尾空白）
    pub text: String,
}

/// The outcome of launching the application under test.
/// A failed launch is report content, never a hard error of the tool.
///
/// 启动被测应用程序的结果。
/// 启动失败是报告内容，绝不是工具本身的硬错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchStatus {
    /// The launcher succeeded, or the application was still running when
    /// the launch timeout elapsed (expected for GUI applications).
    /// 启动器成功，或者在启动超时结束时应用程序仍在运行（对 GUI 应用程序来说是预期的）。
    Launched,
    /// The launcher could not be spawned, or exited with a nonzero code.
    /// 启动器无法派生，或以非零代码退出。
    Failed {
        /// Human-readable cause / 人类可读的原因
        message: String,
    },
}

impl LaunchStatus {
    pub fn is_launched(&self) -> bool {
        matches!(self, LaunchStatus::Launched)
    }

    /// Returns the failure message, if the launch failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            LaunchStatus::Launched => None,
            LaunchStatus::Failed { message } => Some(message),
        }
    }
}

/// One complete smoke-test pass: which application was tested, when,
/// whether it launched, and every issue found in the scanned logs.
/// Immutable once assembled; formatting never mutates it.
///
/// 一次完整的冒烟测试：测试了哪个应用程序、何时测试、是否启动成功，
/// 以及在扫描的日志中发现的每个问题。
/// 组装后不可变；格式化绝不会修改它。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    /// Path to the application bundle under test / 被测应用程序包的路径
    pub app_path: PathBuf,
    /// Display name, the final path component / 显示名称，即路径的最后一段
    pub app_name: String,
    /// Local time the pass finished scanning / 本次运行完成扫描的本地时间
    pub timestamp: DateTime<Local>,
    /// Launch outcome / 启动结果
    pub launch: LaunchStatus,
    /// Issues found in the scanned log files, in scan order
    /// 在扫描的日志文件中发现的问题，按扫描顺序排列
    pub issues: Vec<Issue>,
}

impl TestReport {
    /// Assembles a report for a finished pass, stamped with the current
    /// local time.
    pub fn new(app_path: &Path, launch: LaunchStatus, issues: Vec<Issue>) -> Self {
        let app_name = app_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| app_path.display().to_string());
        Self {
            app_path: app_path.to_path_buf(),
            app_name,
            timestamp: Local::now(),
            launch,
            issues,
        }
    }

    /// Number of issues found. Always equals `issues.len()`.
    /// 发现的问题数量。始终等于 `issues.len()`。
    pub fn issues_found(&self) -> usize {
        self.issues.len()
    }

    /// A pass counts as passed only when the application launched and the
    /// scan came back clean.
    pub fn passed(&self) -> bool {
        self.launch.is_launched() && self.issues.is_empty()
    }
}
