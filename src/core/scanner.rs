//! # Log Scanner Module / 日志扫描器模块
//!
//! This module expands the configured log pattern and scans every matched
//! file for trouble keywords. Matching is a single case-insensitive
//! alternation over all configured keywords; every matching line becomes
//! one issue record carrying the file, the 1-based line number and the
//! keyword family that matched.
//!
//! 此模块展开配置的日志模式并扫描每个匹配的文件以查找故障关键字。
//! 匹配是对所有配置关键字的单个不区分大小写的交替匹配；
//! 每个匹配行成为一条问题记录，携带文件、从 1 开始的行号以及匹配到的关键字类别。

use anyhow::{bail, Context, Result};
use colored::*;
use futures::{stream, StreamExt};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::core::config::Keywords;
use crate::core::models::{Issue, IssueCategory};

/// Compiled keyword set. One regex over every configured keyword; the
/// category of a line is the family of its leftmost matching keyword.
///
/// 已编译的关键字集合。一个覆盖所有配置关键字的正则表达式；
/// 一行的类别是其最靠左匹配关键字所属的类别。
#[derive(Debug)]
pub struct KeywordMatcher {
    pattern: Regex,
    families: Vec<(String, IssueCategory)>,
}

impl KeywordMatcher {
    /// Builds a matcher from the configured keyword families.
    /// Fails when every family is empty, since a scan that can never
    /// match anything is a configuration mistake, not a clean run.
    pub fn from_keywords(keywords: &Keywords) -> Result<Self> {
        if keywords.is_empty() {
            bail!("No keywords configured; nothing to scan for");
        }

        let mut families = Vec::new();
        let mut alternates = Vec::new();
        for (category, words) in keywords.families() {
            for word in words {
                let word = word.trim();
                if word.is_empty() {
                    continue;
                }
                alternates.push(regex::escape(word));
                families.push((word.to_lowercase(), category));
            }
        }
        if alternates.is_empty() {
            bail!("No keywords configured; nothing to scan for");
        }

        let pattern = Regex::new(&format!("(?i){}", alternates.join("|")))
            .context("Failed to compile keyword pattern")?;

        Ok(Self { pattern, families })
    }

    /// Classifies a single line: `Some(category)` for the leftmost
    /// matching keyword, `None` when the line is clean.
    pub fn classify(&self, line: &str) -> Option<IssueCategory> {
        let matched = self.pattern.find(line)?.as_str().to_lowercase();
        self.families
            .iter()
            .find(|(word, _)| *word == matched)
            .map(|(_, category)| *category)
    }
}

static DEFAULT_MATCHER: Lazy<KeywordMatcher> = Lazy::new(|| {
    KeywordMatcher::from_keywords(&Keywords::default()).expect("default keyword set compiles")
});

/// The matcher for the built-in keyword set, compiled once.
/// 内置关键字集合的匹配器，只编译一次。
pub fn default_matcher() -> &'static KeywordMatcher {
    &DEFAULT_MATCHER
}

/// Expands a log pattern to the files it matches, in the glob's natural
/// return order. `~` is expanded first; a literal path without wildcards
/// is a valid pattern matching itself when the file exists.
///
/// 将日志模式展开为其匹配的文件，按 glob 的自然返回顺序。
/// 首先展开 `~`；不带通配符的字面路径是一个有效模式，当文件存在时匹配其自身。
pub fn expand_pattern(pattern: &str) -> std::result::Result<Vec<PathBuf>, glob::PatternError> {
    let expanded = shellexpand::tilde(pattern);
    let paths = glob::glob(&expanded)?;
    // Entries the glob could not stat are skipped, like any other
    // unreadable file in this best-effort scan.
    Ok(paths
        .filter_map(std::result::Result::ok)
        .filter(|p| p.is_file())
        .collect())
}

/// Scans every file matched by `pattern`, up to `jobs` files in flight at
/// once. File order follows the glob's return order and line order is
/// preserved within each file. The scan is best-effort all the way down:
/// unreadable files are skipped silently and an unparsable pattern scans
/// nothing, with a console warning.
///
/// 扫描 `pattern` 匹配的每个文件，最多同时处理 `jobs` 个文件。
/// 文件顺序遵循 glob 的返回顺序，每个文件内保留行顺序。
/// 扫描自始至终是尽力而为的：无法读取的文件被静默跳过，
/// 无法解析的模式不扫描任何内容，并发出控制台警告。
pub async fn scan_logs(pattern: &str, matcher: &KeywordMatcher, jobs: usize) -> Vec<Issue> {
    let files = match expand_pattern(pattern) {
        Ok(files) => files,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: skipping unparsable log pattern {pattern}: {e}").yellow()
            );
            return Vec::new();
        }
    };

    // `buffered`, not `buffer_unordered`: the per-file scans run
    // concurrently but the results keep the glob's file order.
    // 使用 `buffered` 而不是 `buffer_unordered`：每个文件的扫描并发运行，
    // 但结果保持 glob 的文件顺序。
    let per_file: Vec<Vec<Issue>> = stream::iter(
        files
            .into_iter()
            .map(|file| async move { scan_file(&file, matcher).await.unwrap_or_default() }),
    )
    .buffered(jobs.max(1))
    .collect()
    .await;

    per_file.into_iter().flatten().collect()
}

/// Scans a single file, reading it as lossy UTF-8 so binary content
/// degrades to unmatchable garbage instead of an error.
///
/// 扫描单个文件，以宽松的 UTF-8 方式读取，使二进制内容退化为
/// 无法匹配的乱码而不是错误。
pub async fn scan_file(path: &Path, matcher: &KeywordMatcher) -> std::io::Result<Vec<Issue>> {
    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(text
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            matcher.classify(line).map(|category| Issue {
                file: path.to_path_buf(),
                line: index + 1,
                category,
                text: line.trim().to_string(),
            })
        })
        .collect())
}
