//! # HTML Reporting Module / HTML 报告模块
//!
//! Optional single-file HTML export of a smoke-test pass: summary tiles
//! plus an issues table, with the style embedded so the file travels
//! well as a CI artifact.
//!
//! 冒烟测试结果的可选单文件 HTML 导出：摘要卡片加问题表格，
//! 样式内嵌，使文件可以作为 CI 产物方便地传递。

use anyhow::Result;
use maud::{html, DOCTYPE, Markup, PreEscaped};
use std::path::Path;

use crate::core::models::{LaunchStatus, TestReport};
use crate::infra::fs;

const REPORT_STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', sans-serif; margin: 2em auto; max-width: 60em; color: #222; }\
h1 { font-size: 1.4em; border-bottom: 2px solid #eee; padding-bottom: .4em; }\
.summary-container { display: flex; gap: 1em; margin: 1.5em 0; }\
.summary-item { flex: 1; background: #f7f7f7; border-radius: 6px; padding: 1em; text-align: center; }\
.summary-item .count { display: block; font-size: 1.6em; font-weight: bold; }\
.summary-item .label { color: #777; font-size: .85em; }\
.status-ok { color: #2e7d32; }\
.status-failed { color: #c62828; }\
table { border-collapse: collapse; width: 100%; }\
th, td { border: 1px solid #ddd; padding: .4em .6em; text-align: left; font-size: .9em; }\
th { background: #f0f0f0; }\
.category { display: inline-block; border-radius: 4px; padding: 0 .5em; color: #fff; font-size: .85em; }\
.category-error { background: #c62828; }\
.category-crash { background: #6a1b9a; }\
.category-fail { background: #ef6c00; }\
.no-issues { color: #2e7d32; font-weight: bold; }\
.meta { color: #999; font-size: .8em; margin-top: 2em; }";

/// Writes a self-contained HTML report for one pass.
///
/// # Arguments / 参数
/// * `report` - The finished pass / 完成的一次运行
/// * `output_path` - Destination file / 目标文件
pub fn generate_html_report(report: &TestReport, output_path: &Path) -> Result<()> {
    let (status_class, status_text) = match &report.launch {
        LaunchStatus::Launched => ("status-ok", "Launched successfully".to_string()),
        LaunchStatus::Failed { message } => ("status-failed", format!("Failed: {message}")),
    };

    let markup: Markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Smoke Test Report - " (report.app_name) }
                style { (PreEscaped(REPORT_STYLE)) }
            }
            body {
                h1 { "Smoke Test Report" }
                div class="summary-container" {
                    div class="summary-item" {
                        span class="count" { (report.app_name) }
                        span class="label" { "Application" }
                    }
                    div class="summary-item" {
                        span class=(format!("count {status_class}")) { (status_text) }
                        span class="label" { "Launch" }
                    }
                    div class="summary-item" {
                        span class="count" { (report.issues_found()) }
                        span class="label" { "Issues Found" }
                    }
                }
                @if report.issues.is_empty() {
                    p class="no-issues" { "No issues detected" }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "File" }
                                th { "Line" }
                                th { "Category" }
                                th { "Text" }
                            }
                        }
                        tbody {
                            @for issue in &report.issues {
                                tr {
                                    td { (issue.file.display()) }
                                    td { (issue.line) }
                                    td {
                                        span class=(format!("category category-{}", issue.category)) {
                                            (issue.category)
                                        }
                                    }
                                    td { code { (issue.text) } }
                                }
                            }
                        }
                    }
                }
                p class="meta" {
                    "Generated " (report.timestamp.format("%Y-%m-%d %H:%M:%S"))
                    " for " (report.app_path.display())
                }
            }
        }
    };

    fs::write_export(output_path, &markup.into_string())
}
