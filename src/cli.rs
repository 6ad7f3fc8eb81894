// src/cli.rs
use anyhow::Result;
use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub mod commands;

fn build_cli() -> Command {
    Command::new("smoke-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Smoke-test a macOS application: launch it, check it stays alive, scan its logs for trouble.")
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new("app-path")
                .help("Path to the macOS application bundle (.app) under test")
                .value_name("APP_PATH")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Glob pattern of log files to scan (default: ~/Library/Logs/DiagnosticReports/*.crash)")
                .value_name("PATTERN")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("continuous")
                .long("continuous")
                .help("Relaunch and rescan on a fixed interval until interrupted")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .help("Seconds between passes in continuous mode")
                .value_name("SECS")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file")
                .value_name("CONFIG")
                .default_value("smoketest.toml")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Report file to append to")
                .value_name("REPORT")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Number of log files scanned concurrently")
                .value_name("JOBS")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Also write an HTML report to this path (single mode)")
                .value_name("HTML")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Also write the report as JSON to this path (single mode)")
                .value_name("JSON")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("init")
                .about("Create a smoketest.toml configuration file")
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Write the default configuration without launching the interactive wizard")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Overwrite an existing configuration file")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("init", init_matches)) => commands::init::execute(
            init_matches.get_flag("non-interactive"),
            init_matches.get_flag("force"),
        ),
        _ => {
            let args = commands::test::TestArgs {
                app_path: matches
                    .get_one::<PathBuf>("app-path")
                    .cloned()
                    .unwrap(), // Required unless a subcommand was given
                log: matches.get_one::<String>("log").cloned(),
                continuous: matches.get_flag("continuous"),
                interval: matches.get_one::<u64>("interval").copied(),
                config: matches
                    .get_one::<PathBuf>("config")
                    .cloned()
                    .unwrap(), // Has default
                config_explicit: matches.value_source("config")
                    == Some(ValueSource::CommandLine),
                report: matches.get_one::<PathBuf>("report").cloned(),
                jobs: matches.get_one::<usize>("jobs").copied(),
                html: matches.get_one::<PathBuf>("html").cloned(),
                json: matches.get_one::<PathBuf>("json").cloned(),
            };
            commands::test::execute(args).await
        }
    }
}
