// SPDX-License-Identifier: PMPL-1.0-or-later
//! File scanner and directory walker.
//!
//! `scan_content` runs every catalogue rule over one file's text. `scan_tree`
//! walks a directory in file-name order and concatenates per-file results, so
//! the same tree always yields the same issue sequence.

use crate::config::ScanConfig;
use crate::error::{AuditError, Result};
use crate::issue::Issue;
use crate::rules;
use std::path::Path;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Run the whole catalogue over `content`, attributing issues to `file_path`.
///
/// Issues come out in catalogue order, then in match order within a rule.
pub fn scan_content(file_path: &str, content: &str) -> Vec<Issue> {
    let lines: Vec<&str> = content.lines().collect();
    let mut issues = Vec::new();

    for rule in rules::catalogue() {
        for found in rule.matcher.find_all(content) {
            let line_number = line_of(content, found.start);
            let snippet = snippet_around(&lines, line_number);
            issues.push(Issue::new(rule, file_path, line_number, snippet));
        }
    }

    issues
}

/// Scan a single file for accessibility issues
pub fn scan_file(path: &Path) -> Result<Vec<Issue>> {
    let content = std::fs::read_to_string(path).map_err(|source| AuditError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let issues = scan_content(&path.display().to_string(), &content);
    debug!("{}: {} issue(s)", path.display(), issues.len());
    Ok(issues)
}

/// Scan a directory tree, skipping unreadable files.
///
/// Only files whose extension is configured are scanned, and excluded
/// directory names are never descended into.
pub fn scan_tree(root: &Path, config: &ScanConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut files_scanned = 0;

    info!("Scanning directory: {}", root.display());

    if config.is_excluded_path(root) {
        info!("{} lies inside an excluded directory", root.display());
        return issues;
    }

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !config.is_excluded_name(e.file_name()))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Symlinked files are scanned; symlinked directories are not entered.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file || !config.matches_extension(entry.path()) {
            continue;
        }

        match scan_file(entry.path()) {
            Ok(file_issues) => issues.extend(file_issues),
            Err(e) => error!("{}", e),
        }
        files_scanned += 1;
    }

    info!("Scanned {} files, found {} issues", files_scanned, issues.len());

    issues
}

/// Audit a file or a directory.
///
/// A file given directly is scanned whatever its extension. Fails only when
/// `path` does not exist; unreadable files degrade to zero issues.
pub fn scan_path(path: &Path, config: &ScanConfig) -> Result<Vec<Issue>> {
    if !path.exists() {
        return Err(AuditError::InputNotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(scan_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            Vec::new()
        }));
    }

    Ok(scan_tree(path, config))
}

/// 1-based line of byte offset `offset`
fn line_of(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// The line before, the line itself and the line after, clamped to the file
fn snippet_around(lines: &[&str], line_number: usize) -> String {
    let end = (line_number + 1).min(lines.len());
    let start = line_number.saturating_sub(2).min(end);
    lines[start..end].join("\n")
}
