//! # Command Execution Module / 命令执行模块
//!
//! Process spawning with captured output. The launcher's stdout and
//! stderr are drained concurrently into separate buffers, and an optional
//! timeout kills a child that is still running when it elapses.
//!
//! 带输出捕获的进程派生。启动器的 stdout 和 stderr 被并发地排入独立的缓冲区，
//! 可选的超时会杀死超时后仍在运行的子进程。

use anyhow::{bail, Context, Result};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// The captured outcome of a spawned command.
/// `status` is `None` when the child was still running at the timeout and
/// had to be killed.
///
/// 派生命令的捕获结果。
/// 当子进程在超时时仍在运行并被杀死时，`status` 为 `None`。
#[derive(Debug)]
pub struct CaptureOutcome {
    pub status: Option<ExitStatus>,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a command and captures stdout and stderr line by line.
/// With a timeout, a child that outlives it is killed and reported as
/// `status: None` rather than as an error.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `timeout` - Optional wall-clock limit for the child.
///
/// 派生一个命令并逐行捕获 stdout 和 stderr。
/// 设置超时后，存活超过该时限的子进程会被杀死，并报告为 `status: None`，
/// 而不是报告为错误。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
    timeout: Option<Duration>,
) -> std::io::Result<CaptureOutcome> {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("Failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("Failed to capture stderr"))?;

    // Drain both streams concurrently so a chatty child cannot fill a
    // pipe buffer and deadlock against our wait().
    // 并发地排空两个流，这样输出多的子进程不会填满管道缓冲区并与我们的 wait() 死锁。
    let stdout_handle = tokio::spawn(read_to_string(stdout));
    let stderr_handle = tokio::spawn(read_to_string(stderr));

    let status = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(status) => Some(status?),
            Err(_) => {
                // Still running at the deadline. Kill it and reap, so the
                // reader tasks see EOF and finish.
                // 在截止时间时仍在运行。杀死并回收它，使读取任务看到 EOF 并结束。
                let _ = child.start_kill();
                let _ = child.wait().await;
                None
            }
        },
        None => Some(child.wait().await?),
    };

    let stdout = stdout_handle.await.unwrap_or_default();
    let stderr = stderr_handle.await.unwrap_or_default();

    Ok(CaptureOutcome {
        status,
        stdout,
        stderr,
    })
}

async fn read_to_string<R>(reader: R) -> String
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut output = String::new();
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Splits a launcher command line into argv, expanding `~` and
/// environment variables first.
///
/// # Arguments
/// * `raw` - The launcher command as configured, e.g. `open` or `open -W`.
///
/// 将启动器命令行拆分为 argv，并先展开 `~` 和环境变量。
pub fn parse_launcher(raw: &str) -> Result<Vec<String>> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand launcher command: {raw}"))?
        .to_string();

    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse launcher command: {expanded}"))?;

    if parts.is_empty() {
        bail!("Launcher command is empty");
    }

    Ok(parts)
}
