//! # Console Reporting Module / 控制台报告模块
//!
//! Colored console rendering of a smoke-test pass. Mirrors the content of
//! the plain-text block, with color coding for the launch status and the
//! issue categories, plus the liveness probe result, which only appears
//! here.
//!
//! 冒烟测试结果的彩色控制台渲染。内容与纯文本块一致，
//! 并对启动状态和问题类别进行颜色编码，另外还有只在这里出现的存活探测结果。

use colored::*;

use crate::core::models::{IssueCategory, LaunchStatus, TestReport};

/// Prints one pass to the console.
///
/// # Arguments / 参数
/// * `report` - The finished pass / 完成的一次运行
/// * `still_running` - Liveness probe result; `None` when the launch
///   failed and nothing was probed
///   存活探测结果；当启动失败且未探测时为 `None`
pub fn print_report(report: &TestReport, still_running: Option<bool>) {
    println!(
        "\n{}",
        format!("=== Test Report for {} ===", report.app_name).bold()
    );
    println!(
        "Timestamp: {}",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    match &report.launch {
        LaunchStatus::Launched => {
            println!("{}", "App Status: Launched successfully".green());
        }
        LaunchStatus::Failed { message } => {
            println!("{}", format!("App Status: Failed: {message}").red());
        }
    }

    match still_running {
        Some(true) => println!(
            "{}",
            "Process check: still running after the grace period".green()
        ),
        Some(false) => println!(
            "{}",
            "Process check: no longer running after the grace period".yellow()
        ),
        None => {}
    }

    let count_line = format!("Issues Found: {}", report.issues_found());
    if report.issues.is_empty() {
        println!("\n{}", count_line.green());
        println!("No issues detected");
    } else {
        println!("\n{}", count_line.red().bold());
        println!("\nDetailed Issues:");
        for issue in &report.issues {
            let category = match issue.category {
                IssueCategory::Error => issue.category.as_str().red(),
                IssueCategory::Crash => issue.category.as_str().magenta(),
                IssueCategory::Fail => issue.category.as_str().yellow(),
            };
            println!(
                "  [{}:{}] ({}) {}",
                issue.file.display().to_string().cyan(),
                issue.line,
                category,
                issue.text
            );
        }
    }

    println!("\n=== End of Report ===");
}
