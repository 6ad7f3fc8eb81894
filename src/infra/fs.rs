//! # File System Operations Module / 文件系统操作模块
//!
//! Small file system helpers: appending complete report blocks and
//! writing export files.
//!
//! 小型文件系统辅助功能：追加完整的报告块和写入导出文件。

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Creates the parent directory of `path` when it does not exist yet.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Appends one report block to the report file as a single write.
/// An interrupt therefore lands between blocks, never inside one, and the
/// file stays readable at all times.
///
/// # Arguments
/// * `path` - The report file; created on first use.
/// * `block` - A complete, self-contained report block.
///
/// 将一个报告块作为单次写入追加到报告文件中。
/// 因此中断只会落在块与块之间，绝不会落在块内部，文件始终保持可读。
pub fn append_report(path: &Path, block: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open report file: {}", path.display()))?;
    file.write_all(block.as_bytes())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}

/// Writes an export file (HTML or JSON report), creating parent
/// directories as needed.
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write export file: {}", path.display()))
}
