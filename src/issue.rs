// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue records produced by the scanner.
//!
//! An [`Issue`] is one rule hit at one location. Rule metadata is copied
//! verbatim from the catalogue entry that produced it, so issues stay
//! meaningful after the catalogue goes out of scope.

use crate::rules::Rule;
use serde::Serialize;

/// Severity of a detected issue, fixed per rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks access
    Critical,
    /// Significant barrier
    Major,
    /// Usability issue
    Minor,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Major, Severity::Minor];

    /// Whether this severity fails the compliance verdict
    pub fn fails_compliance(&self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Major => write!(f, "MAJOR"),
            Severity::Minor => write!(f, "MINOR"),
        }
    }
}

/// One detected violation, tied to a file, a line and the rule that found it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Catalogue key of the producing rule
    #[serde(skip)]
    pub rule: &'static str,
    /// File where the match was found
    #[serde(rename = "file")]
    pub file_path: String,
    /// Line of the match start (1-indexed)
    #[serde(rename = "line")]
    pub line_number: usize,
    pub severity: Severity,
    /// WCAG success criterion, e.g. "1.1.1"
    #[serde(rename = "wcag")]
    pub wcag_criterion: String,
    /// Short label shared by every issue of the same rule
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    /// Up to three source lines centred on the match line
    #[serde(rename = "snippet")]
    pub code_snippet: String,
    #[serde(rename = "fix")]
    pub recommendation: String,
}

impl Issue {
    /// Create an issue for a match of `rule`
    pub fn new(rule: &Rule, file_path: &str, line_number: usize, code_snippet: String) -> Self {
        Self {
            rule: rule.name,
            file_path: file_path.to_string(),
            line_number,
            severity: rule.severity,
            wcag_criterion: rule.wcag.to_string(),
            issue_type: rule.issue_type.to_string(),
            description: rule.description.to_string(),
            code_snippet,
            recommendation: rule.recommendation.to_string(),
        }
    }

    /// Get location string for display
    pub fn location_string(&self) -> String {
        format!("{}:{}", self.file_path, self.line_number)
    }
}
