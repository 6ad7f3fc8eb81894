//! # Smoke Runner Library / Smoke Runner 库
//!
//! This library provides the core functionality for the Smoke Runner tool,
//! a lightweight smoke-test runner for macOS applications. It launches an
//! application bundle, checks that it stays alive, scans its log files for
//! trouble keywords, and appends a timestamped report block to a report file.
//!
//! 此库为 Smoke Runner 工具提供核心功能，
//! 这是一个用于 macOS 应用程序的轻量级冒烟测试运行器。它启动一个应用程序包，
//! 检查它是否保持存活，扫描其日志文件中的故障关键字，并将带时间戳的报告块
//! 追加到报告文件中。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, launching, scanning and the run driver
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Report formatting for console, text file and HTML output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、配置、启动、扫描和运行驱动
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 控制台、文本文件和 HTML 输出的报告格式化
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::execution;
pub use self::core::models;
pub use self::core::scanner;
