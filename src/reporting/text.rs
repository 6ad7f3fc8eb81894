//! # Text Report Module / 文本报告模块
//!
//! The canonical plain-text report block. This format is the tool's
//! persisted contract: parsers and humans alike rely on it, so it is a
//! pure function of the report and nothing else.
//!
//! 规范的纯文本报告块。此格式是该工具的持久化契约：
//! 解析器和人都依赖它，因此它是报告的纯函数，不依赖其他任何东西。

use crate::core::models::{LaunchStatus, TestReport};

/// Header prefix of every report block / 每个报告块的头部前缀
pub const REPORT_HEADER_PREFIX: &str = "=== Test Report for ";

/// Footer line of every report block / 每个报告块的尾部行
pub const REPORT_FOOTER: &str = "=== End of Report ===";

/// Renders one complete report block.
///
/// ```text
/// === Test Report for Sample.app ===
///
/// Timestamp: 2024-05-01 12:00:00
/// App Status: Launched successfully
///
/// Issues Found: 1
///
/// Detailed Issues:
///   [/tmp/logs/app.log:42] (fail) connection failed
///
/// === End of Report ===
/// ```
///
/// The block ends with a newline so consecutive appended blocks stay
/// separable.
///
/// 渲染一个完整的报告块。块以换行符结尾，使连续追加的块保持可分割。
pub fn format_report(report: &TestReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{}{} ===\n", REPORT_HEADER_PREFIX, report.app_name));
    lines.push(format!(
        "Timestamp: {}",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    match &report.launch {
        LaunchStatus::Launched => lines.push("App Status: Launched successfully".to_string()),
        LaunchStatus::Failed { message } => {
            lines.push(format!("App Status: Failed: {message}"));
        }
    }

    lines.push(format!("\nIssues Found: {}", report.issues_found()));

    if report.issues.is_empty() {
        lines.push("No issues detected".to_string());
    } else {
        lines.push("\nDetailed Issues:".to_string());
        for issue in &report.issues {
            lines.push(format!(
                "  [{}:{}] ({}) {}",
                issue.file.display(),
                issue.line,
                issue.category,
                issue.text
            ));
        }
    }

    lines.push(format!("\n{REPORT_FOOTER}\n"));

    lines.join("\n")
}
