//! # Application Launcher Module / 应用程序启动器模块
//!
//! Launches the application bundle through the configured launcher
//! command (the macOS `open` mechanism by default) and classifies the
//! outcome, plus a single point-in-time liveness probe against the
//! system process table.
//!
//! 通过配置的启动器命令（默认为 macOS 的 `open` 机制）启动应用程序包并
//! 对结果进行分类，另外提供一次针对系统进程表的即时存活探测。

use std::path::Path;
use std::time::Duration;
use sysinfo::{ProcessesToUpdate, System};

use crate::core::config::SmokeConfig;
use crate::core::models::LaunchStatus;
use crate::infra::command;

/// Launches the application and classifies the result.
///
/// The launcher is given `launch_timeout_secs` to finish:
/// - exit 0 means the launch succeeded;
/// - a nonzero exit is a launch failure, carrying the exit code and any
///   stderr the launcher produced;
/// - a launcher still running at the deadline is attached to a live GUI
///   application, so the child is killed and the launch counts as a
///   success.
///
/// A missing bundle path or a spawn error is reported as a failure.
/// None of these outcomes abort the run; the caller records them in the
/// report and keeps going.
///
/// 启动应用程序并对结果进行分类。
/// 启动器有 `launch_timeout_secs` 秒来完成：退出码 0 表示启动成功；
/// 非零退出码表示启动失败，并携带退出码和启动器产生的 stderr；
/// 在截止时间仍在运行的启动器连接着一个存活的 GUI 应用程序，
/// 因此子进程被杀死且启动计为成功。
pub async fn launch_app(app_path: &Path, config: &SmokeConfig) -> LaunchStatus {
    if !app_path.exists() {
        return LaunchStatus::Failed {
            message: format!("Application not found at {}", app_path.display()),
        };
    }

    let argv = match command::parse_launcher(&config.launcher) {
        Ok(argv) => argv,
        Err(e) => {
            return LaunchStatus::Failed {
                message: format!("Invalid launcher command: {e}"),
            };
        }
    };

    let mut cmd = tokio::process::Command::new(&argv[0]);
    cmd.args(&argv[1..]).arg(app_path).kill_on_drop(true);

    let timeout = Duration::from_secs(config.launch_timeout_secs);
    match command::spawn_and_capture(cmd, Some(timeout)).await {
        Ok(outcome) => match outcome.status {
            Some(status) if status.success() => LaunchStatus::Launched,
            Some(status) => {
                let code = status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "<signal>".to_string());
                let stderr = outcome.stderr.trim();
                let message = if stderr.is_empty() {
                    format!("Application exited with code {code}")
                } else {
                    format!("Application exited with code {code}: {stderr}")
                };
                LaunchStatus::Failed { message }
            }
            // Launcher still running at the deadline: the GUI app is up.
            // 启动器在截止时间仍在运行：GUI 应用程序已启动。
            None => LaunchStatus::Launched,
        },
        Err(e) => LaunchStatus::Failed {
            message: format!("Failed to launch application: {e}"),
        },
    }
}

/// One point-in-time check of the system process table: is there a
/// process whose name contains `app_name`? No retries; callers decide
/// what the answer means.
///
/// 对系统进程表进行一次即时检查：是否存在名称包含 `app_name` 的进程？
/// 不重试；由调用者决定答案的含义。
pub fn is_app_running(app_name: &str) -> bool {
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::All, true);
    sys.processes_by_name(app_name.as_ref()).next().is_some()
}

/// The process name to probe for: the bundle's file stem
/// (`/Applications/Safari.app` launches a `Safari` process).
pub fn process_name(app_path: &Path) -> Option<String> {
    app_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
