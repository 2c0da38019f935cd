// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report aggregation for accessibility issues.
//!
//! [`aggregate`] is a pure function of the issue list. Rendering lives in
//! the submodules:
//! - `console`: fixed-layout human summary
//! - `json`: the full report as structured JSON

pub mod console;
pub mod json;

use crate::issue::{Issue, Severity};
use indexmap::IndexMap;
use serde::Serialize;

/// Overall verdict, decided only by critical issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compliance {
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "PASS WITH WARNINGS")]
    PassWithWarnings,
}

impl Compliance {
    /// Process exit code for this verdict
    pub fn exit_code(&self) -> u8 {
        match self {
            Compliance::Fail => 1,
            Compliance::PassWithWarnings => 0,
        }
    }
}

impl std::fmt::Display for Compliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compliance::Fail => write!(f, "FAIL"),
            Compliance::PassWithWarnings => write!(f, "PASS WITH WARNINGS"),
        }
    }
}

/// Headline counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_issues: usize,
    pub critical_issues: usize,
    pub major_issues: usize,
    pub minor_issues: usize,
    /// Distinct files with at least one issue
    pub files_analyzed: usize,
    pub wcag_compliance: Compliance,
}

/// Issues partitioned by severity, discovery order kept in each bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeverityBuckets {
    pub critical: Vec<Issue>,
    pub major: Vec<Issue>,
    pub minor: Vec<Issue>,
}

impl SeverityBuckets {
    pub fn get(&self, severity: Severity) -> &[Issue] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Major => &self.major,
            Severity::Minor => &self.minor,
        }
    }

    fn push(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Critical => self.critical.push(issue),
            Severity::Major => self.major.push(issue),
            Severity::Minor => self.minor.push(issue),
        }
    }
}

/// Aggregated audit report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub issues_by_severity: SeverityBuckets,
    /// File path to its issues, files in first-discovered order
    pub issues_by_file: IndexMap<String, Vec<Issue>>,
    /// Issue type to occurrence count, types in first-encountered order
    #[serde(rename = "patterns")]
    pub pattern_counts: IndexMap<String, usize>,
}

impl Report {
    pub fn compliance(&self) -> Compliance {
        self.summary.wcag_compliance
    }

    pub fn exit_code(&self) -> u8 {
        self.compliance().exit_code()
    }

    /// Issue types by count, most frequent first; ties keep first-seen order
    pub fn top_patterns(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> =
            self.pattern_counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(limit);
        counts
    }
}

/// Build a report from the flat issue list of one run
pub fn aggregate(issues: &[Issue]) -> Report {
    let mut by_severity = SeverityBuckets::default();
    let mut by_file: IndexMap<String, Vec<Issue>> = IndexMap::new();
    let mut patterns: IndexMap<String, usize> = IndexMap::new();

    for issue in issues {
        by_severity.push(issue.clone());
        by_file
            .entry(issue.file_path.clone())
            .or_default()
            .push(issue.clone());
        *patterns.entry(issue.issue_type.clone()).or_default() += 1;
    }

    let critical_issues = by_severity.critical.len();
    let fails = issues.iter().any(|i| i.severity.fails_compliance());
    let summary = Summary {
        total_issues: issues.len(),
        critical_issues,
        major_issues: by_severity.major.len(),
        minor_issues: by_severity.minor.len(),
        files_analyzed: by_file.len(),
        wcag_compliance: if fails {
            Compliance::Fail
        } else {
            Compliance::PassWithWarnings
        },
    };

    Report {
        summary,
        issues_by_severity: by_severity,
        issues_by_file: by_file,
        pattern_counts: patterns,
    }
}
