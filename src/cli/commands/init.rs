//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command of the Smoke Runner CLI,
//! which creates a new `smoketest.toml` configuration file, either
//! through an interactive wizard or from the commented default template.
//!
//! 此模块实现 Smoke Runner CLI 的 `init` 命令，
//! 用于创建新的 `smoketest.toml` 配置文件，
//! 可以通过交互式向导或带注释的默认模板创建。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use std::fs;
use std::path::Path;

use crate::core::config::{self, Keywords, SmokeConfig};

/// The default name for the configuration file.
/// 配置文件的默认名称。
pub const CONFIG_FILE_NAME: &str = "smoketest.toml";

/// Commented default configuration, written by `init --non-interactive`.
/// Every value shown is the built-in default.
pub const DEFAULT_CONFIG: &str = r#"# Smoke test configuration / 冒烟测试配置
# Every value shown here is the built-in default; delete a line to keep it.
# 此处显示的每个值都是内置默认值；删除某行即可保留默认值。

# Glob pattern of log files to scan after each launch / 每次启动后要扫描的日志文件的 glob 模式
log_pattern = "~/Library/Logs/DiagnosticReports/*.crash"

# Report file, appended to after every pass / 报告文件，每次运行后追加
report_path = "test_report.log"

# Seconds between passes in --continuous mode / --continuous 模式下两次运行之间的秒数
interval_secs = 10

# Seconds to wait after the launch before checking the process and scanning logs
# 启动后在检查进程和扫描日志之前等待的秒数
grace_secs = 2

# Seconds to wait for the launcher before treating the application as still running
# 在将应用程序视为仍在运行之前等待启动器的秒数
launch_timeout_secs = 30

# Command used to open the application bundle / 用于打开应用程序包的命令
launcher = "open"

# Keyword families; any line containing a keyword (case-insensitive) becomes an issue
# 关键字类别；包含关键字的任何行（不区分大小写）都会成为一个问题
[keywords]
error = ["error"]
crash = ["crash", "segmentation fault"]
fail = ["fail"]
"#;

/// Executes the init command.
///
/// # Arguments
/// * `non_interactive` - Write the default template without the wizard.
/// * `force` - Overwrite an existing configuration file without asking.
pub fn execute(non_interactive: bool, force: bool) -> Result<()> {
    let theme = ColorfulTheme::default();

    // Check if configuration file already exists and get user confirmation
    // 检查配置文件是否已存在并获取用户确认
    if Path::new(CONFIG_FILE_NAME).exists() && !force {
        if non_interactive {
            println!(
                "{}",
                format!("{CONFIG_FILE_NAME} already exists, pass --force to overwrite").yellow()
            );
            return Ok(());
        }

        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{CONFIG_FILE_NAME} already exists. Overwrite?"))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !overwrite {
            println!("{}", "Aborted, existing configuration kept".yellow());
            return Ok(());
        }
    }

    if non_interactive {
        fs::write(CONFIG_FILE_NAME, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {CONFIG_FILE_NAME}"))?;
    } else {
        println!(
            "\n{}",
            "Let's set up a smoke test configuration.".bold().cyan()
        );
        let config = run_wizard(&theme)?;
        let toml_string =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        fs::write(CONFIG_FILE_NAME, toml_string)
            .with_context(|| format!("Failed to write {CONFIG_FILE_NAME}"))?;
    }

    println!(
        "\n{} {}",
        "✔".green(),
        format!("Created {CONFIG_FILE_NAME}").bold()
    );
    println!("Run `smoke-runner /Applications/YourApp.app` to start a smoke test.");

    Ok(())
}

/// Asks for the handful of values people actually change; everything else
/// keeps its default.
fn run_wizard(theme: &ColorfulTheme) -> Result<SmokeConfig> {
    let defaults = SmokeConfig::default();

    let log_pattern: String = Input::with_theme(theme)
        .with_prompt("Log files to scan (glob pattern)")
        .default(config::default_log_pattern())
        .interact_text()?;

    let report_path: String = Input::with_theme(theme)
        .with_prompt("Report file")
        .default(defaults.report_path.display().to_string())
        .interact_text()?;

    let interval_secs: u64 = Input::with_theme(theme)
        .with_prompt("Seconds between passes in continuous mode")
        .default(defaults.interval_secs)
        .interact_text()?;

    let families = ["error", "crash", "fail"];
    let selections = MultiSelect::with_theme(theme)
        .with_prompt("Keyword families to scan for")
        .items(&families)
        .defaults(&[true, true, true])
        .interact()?;

    if selections.is_empty() {
        println!(
            "{}",
            "No keyword families selected; the scan would never match anything".yellow()
        );
    }

    let default_keywords = Keywords::default();
    let keywords = Keywords {
        error: if selections.contains(&0) {
            default_keywords.error
        } else {
            vec![]
        },
        crash: if selections.contains(&1) {
            default_keywords.crash
        } else {
            vec![]
        },
        fail: if selections.contains(&2) {
            default_keywords.fail
        } else {
            vec![]
        },
    };

    Ok(SmokeConfig {
        log_pattern,
        report_path: report_path.into(),
        interval_secs,
        keywords,
        ..defaults
    })
}
