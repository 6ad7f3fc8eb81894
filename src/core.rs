//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Smoke Runner,
//! including the data model, configuration, application launching,
//! log scanning and the run driver.
//!
//! 此模块包含 Smoke Runner 的核心功能，
//! 包括数据模型、配置、应用程序启动、日志扫描和运行驱动。

pub mod config;
pub mod execution;
pub mod launcher;
pub mod models;
pub mod scanner;

// Re-exports
pub use config::SmokeConfig;
pub use models::TestReport;
pub use scanner::KeywordMatcher;
