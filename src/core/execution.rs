//! # Run Driver Module / 运行驱动模块
//!
//! The smoke-test pass itself: launch the application, give crashes a
//! moment to be written out, probe liveness, scan the logs and assemble
//! the report. Single passes and the continuous loop both build on the
//! same pass function; the continuous loop is interrupted through a
//! cancellation token and only ever between passes, so every appended
//! report block is complete.
//!
//! 冒烟测试本身：启动应用程序，给崩溃留出写出的时间，探测存活状态，
//! 扫描日志并组装报告。单次运行和连续循环都基于同一个 pass 函数；
//! 连续循环通过取消令牌中断，且只在两次运行之间中断，
//! 因此追加的每个报告块都是完整的。

use anyhow::Result;
use colored::*;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::core::config::SmokeConfig;
use crate::core::launcher;
use crate::core::models::TestReport;
use crate::core::scanner::{self, KeywordMatcher};
use crate::infra::fs;
use crate::reporting::{console, text};

/// Everything one pass produced: the report plus the liveness probe
/// result, which is operator feedback rather than report content.
/// `still_running` is `None` when the launch failed and there was
/// nothing to probe for.
///
/// 一次运行产生的所有内容：报告以及存活探测结果，
/// 后者是操作者反馈而非报告内容。
/// 当启动失败而无可探测时，`still_running` 为 `None`。
#[derive(Debug)]
pub struct PassOutcome {
    pub report: TestReport,
    pub still_running: Option<bool>,
}

/// Runs one complete smoke-test pass without touching the report file.
/// Nothing in a pass is fatal: launch failures become report content and
/// the scan is best-effort.
///
/// # Arguments
/// * `app_path` - The application bundle under test.
/// * `config` - The run configuration.
/// * `matcher` - The compiled keyword set.
///
/// 运行一次完整的冒烟测试，不触碰报告文件。
/// 运行中没有致命错误：启动失败成为报告内容，扫描是尽力而为的。
pub async fn run_pass(
    app_path: &Path,
    config: &SmokeConfig,
    matcher: &KeywordMatcher,
) -> PassOutcome {
    let launch = launcher::launch_app(app_path, config).await;

    // Give potential crashes time to reach the log files.
    // 给潜在的崩溃留出到达日志文件的时间。
    if config.grace_secs > 0 {
        tokio::time::sleep(Duration::from_secs(config.grace_secs)).await;
    }

    let still_running = if launch.is_launched() {
        launcher::process_name(app_path).map(|name| launcher::is_app_running(&name))
    } else {
        None
    };

    let issues = scanner::scan_logs(&config.log_pattern, matcher, config.scan_jobs()).await;

    PassOutcome {
        report: TestReport::new(app_path, launch, issues),
        still_running,
    }
}

/// Runs one pass, prints it and appends its block to the report file.
///
/// 运行一次，打印结果并将其报告块追加到报告文件。
pub async fn run_single(
    app_path: &Path,
    config: &SmokeConfig,
    matcher: &KeywordMatcher,
) -> Result<PassOutcome> {
    let outcome = run_pass(app_path, config, matcher).await;
    emit(&outcome, config)?;
    Ok(outcome)
}

/// Repeats passes on the configured interval until the token is
/// cancelled. Returns the number of completed passes; exactly that many
/// complete report blocks have been appended.
///
/// # Arguments
/// * `token` - Cancelled externally (Ctrl-C) to stop the loop. Checked
///   only between passes, never inside a report write.
///
/// 按配置的间隔重复运行，直到令牌被取消。返回完成的运行次数；
/// 恰好追加了同样数量的完整报告块。
pub async fn run_continuous(
    app_path: &Path,
    config: &SmokeConfig,
    matcher: &KeywordMatcher,
    token: CancellationToken,
) -> Result<usize> {
    let interval = Duration::from_secs(config.interval_secs);
    let mut passes = 0usize;

    loop {
        if token.is_cancelled() {
            break;
        }

        let outcome = run_pass(app_path, config, matcher).await;
        emit(&outcome, config)?;
        passes += 1;

        tokio::select! {
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    Ok(passes)
}

/// Prints a pass and appends its block to the report file as one write.
fn emit(outcome: &PassOutcome, config: &SmokeConfig) -> Result<()> {
    console::print_report(&outcome.report, outcome.still_running);
    fs::append_report(&config.report_path, &text::format_report(&outcome.report))
}

/// Installs the Ctrl-C listener behind a cancellation token.
///
/// 在取消令牌后面安装 Ctrl-C 监听器。
pub fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl-C");
        println!(
            "\n{}",
            "Interrupt received, stopping after the current pass...".yellow()
        );
        token_clone.cancel();
    });

    token
}
