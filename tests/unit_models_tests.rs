//! # Models Module Unit Tests / 数据模型模块单元测试
//!
//! Unit tests for the report data model: the issue-count invariant, the
//! pass/fail predicates and the category rendering.
//!
//! 报告数据模型的单元测试：问题计数不变量、通过/失败判定以及类别渲染。

use smoke_runner::core::models::{Issue, IssueCategory, LaunchStatus, TestReport};
use std::path::{Path, PathBuf};

fn issue(category: IssueCategory, line: usize) -> Issue {
    Issue {
        file: PathBuf::from("/tmp/logs/app.log"),
        line,
        category,
        text: "something went wrong".to_string(),
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_issue_count_matches_issue_list() {
        let issues = vec![
            issue(IssueCategory::Error, 3),
            issue(IssueCategory::Fail, 7),
            issue(IssueCategory::Crash, 11),
        ];
        let report = TestReport::new(
            Path::new("/Applications/Sample.app"),
            LaunchStatus::Launched,
            issues,
        );

        assert_eq!(report.issues_found(), report.issues.len());
        assert_eq!(report.issues_found(), 3);
    }

    #[test]
    fn test_empty_report_has_zero_issues() {
        let report = TestReport::new(
            Path::new("/Applications/Sample.app"),
            LaunchStatus::Launched,
            vec![],
        );

        assert_eq!(report.issues_found(), 0);
        assert!(report.passed());
    }

    #[test]
    fn test_app_name_is_final_path_component() {
        let report = TestReport::new(
            Path::new("/Applications/Sample.app"),
            LaunchStatus::Launched,
            vec![],
        );

        assert_eq!(report.app_name, "Sample.app");
    }

    #[test]
    fn test_failed_launch_is_not_a_pass_even_without_issues() {
        let report = TestReport::new(
            Path::new("/Applications/Sample.app"),
            LaunchStatus::Failed {
                message: "Application not found".to_string(),
            },
            vec![],
        );

        assert!(!report.passed());
    }

    #[test]
    fn test_issues_fail_the_pass_even_when_launched() {
        let report = TestReport::new(
            Path::new("/Applications/Sample.app"),
            LaunchStatus::Launched,
            vec![issue(IssueCategory::Error, 1)],
        );

        assert!(!report.passed());
    }

    // A failed launch still carries whatever the scanner found: the
    // issue list is computed from existing logs either way.
    #[test]
    fn test_failed_launch_report_still_carries_issues() {
        let report = TestReport::new(
            Path::new("/Applications/Missing.app"),
            LaunchStatus::Failed {
                message: "Application not found".to_string(),
            },
            vec![issue(IssueCategory::Crash, 87)],
        );

        assert_eq!(report.issues_found(), 1);
        assert!(!report.passed());
    }
}

#[cfg(test)]
mod launch_status_tests {
    use super::*;

    #[test]
    fn test_launched_predicates() {
        let status = LaunchStatus::Launched;
        assert!(status.is_launched());
        assert!(status.failure_message().is_none());
    }

    #[test]
    fn test_failed_carries_its_message() {
        let status = LaunchStatus::Failed {
            message: "Application exited with code 1".to_string(),
        };
        assert!(!status.is_launched());
        assert_eq!(
            status.failure_message(),
            Some("Application exited with code 1")
        );
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_categories_render_lowercase() {
        assert_eq!(IssueCategory::Error.to_string(), "error");
        assert_eq!(IssueCategory::Crash.to_string(), "crash");
        assert_eq!(IssueCategory::Fail.to_string(), "fail");
    }

    #[test]
    fn test_issue_serializes_with_lowercase_category() {
        let json = serde_json::to_string(&issue(IssueCategory::Crash, 87)).unwrap();
        assert!(json.contains("\"category\":\"crash\""));
        assert!(json.contains("\"line\":87"));
    }
}
