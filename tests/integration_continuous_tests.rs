//! # Continuous Mode Integration Tests / 连续模式集成测试
//!
//! Drives the run driver end to end: single passes append one block
//! each, and an interrupted continuous loop leaves exactly as many
//! complete blocks as passes it finished, never a partial one.
//!
//! 端到端驱动运行驱动器：单次运行各追加一个块，
//! 被中断的连续循环留下的完整块数量恰好等于其完成的运行次数，
//! 绝不会留下不完整的块。

mod common;

use smoke_runner::core::config::SmokeConfig;
use smoke_runner::core::execution;
use smoke_runner::core::scanner::default_matcher;
use smoke_runner::reporting::text::{REPORT_FOOTER, REPORT_HEADER_PREFIX};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_single_pass_appends_one_complete_block() {
    let dir = TempDir::new().unwrap();
    let app = common::fake_app(dir.path());
    let config = common::quiet_config(dir.path());
    common::write_log(dir.path(), "app.log", "nothing to see here\n");

    let outcome = execution::run_single(&app, &config, default_matcher())
        .await
        .unwrap();

    assert!(outcome.report.passed());
    let contents = fs::read_to_string(&config.report_path).unwrap();
    assert_eq!(common::count_occurrences(&contents, REPORT_HEADER_PREFIX), 1);
    assert_eq!(common::count_occurrences(&contents, REPORT_FOOTER), 1);
}

#[tokio::test]
async fn test_two_clean_passes_append_two_zero_issue_blocks() {
    let dir = TempDir::new().unwrap();
    let app = common::fake_app(dir.path());
    let config = common::quiet_config(dir.path());

    execution::run_single(&app, &config, default_matcher())
        .await
        .unwrap();
    execution::run_single(&app, &config, default_matcher())
        .await
        .unwrap();

    let contents = fs::read_to_string(&config.report_path).unwrap();
    assert_eq!(common::count_occurrences(&contents, "Issues Found: 0"), 2);
    assert_eq!(common::count_occurrences(&contents, REPORT_FOOTER), 2);
}

#[tokio::test]
async fn test_failed_launch_still_scans_and_reports() {
    let dir = TempDir::new().unwrap();
    let app = common::fake_app(dir.path());
    common::write_log(dir.path(), "app.log", "old crash remains on disk\n");
    let config = SmokeConfig {
        launcher: "false".to_string(),
        ..common::quiet_config(dir.path())
    };

    let outcome = execution::run_single(&app, &config, default_matcher())
        .await
        .unwrap();

    assert!(!outcome.report.launch.is_launched());
    assert_eq!(outcome.report.issues_found(), 1);
    assert!(outcome.still_running.is_none());

    let contents = fs::read_to_string(&config.report_path).unwrap();
    assert!(contents.contains("App Status: Failed:"));
    assert!(contents.contains("Issues Found: 1"));
}

#[tokio::test]
async fn test_interrupted_loop_leaves_only_complete_blocks() {
    let dir = TempDir::new().unwrap();
    let app = common::fake_app(dir.path());
    let config = common::quiet_config(dir.path());
    common::write_log(dir.path(), "app.log", "a fail line\n");

    let token = CancellationToken::new();
    let canceller = token.clone();
    let handle = tokio::spawn({
        let app = app.clone();
        let config = config.clone();
        async move { execution::run_continuous(&app, &config, default_matcher(), token).await }
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    canceller.cancel();
    let passes = handle.await.unwrap().unwrap();

    assert!(passes >= 1);
    let contents = fs::read_to_string(&config.report_path).unwrap();
    assert_eq!(
        common::count_occurrences(&contents, REPORT_HEADER_PREFIX),
        passes
    );
    assert_eq!(common::count_occurrences(&contents, REPORT_FOOTER), passes);
    // Every block carries the same single issue.
    assert_eq!(
        common::count_occurrences(&contents, "Issues Found: 1"),
        passes
    );
}

#[tokio::test]
async fn test_pre_cancelled_loop_runs_no_passes() {
    let dir = TempDir::new().unwrap();
    let app = common::fake_app(dir.path());
    let config = common::quiet_config(dir.path());

    let token = CancellationToken::new();
    token.cancel();

    let passes = execution::run_continuous(&app, &config, default_matcher(), token)
        .await
        .unwrap();

    assert_eq!(passes, 0);
    assert!(!config.report_path.exists());
}
