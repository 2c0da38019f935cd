// SPDX-License-Identifier: PMPL-1.0-or-later
//! Console rendering: a fixed-layout summary for humans.
//!
//! Shows at most five critical and five major issues and the five most
//! frequent issue types. The JSON report carries everything else.

use crate::report::Report;
use crate::rules::Rule;

/// Issues listed per severity section
const TOP_ISSUES: usize = 5;
/// Issue types listed in the pattern analysis
const TOP_PATTERNS: usize = 5;

fn rule_line(width: usize, ch: char) -> String {
    ch.to_string().repeat(width)
}

/// Render the console summary of `report`
pub fn render(report: &Report) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    output.push('\n');
    output.push_str(&format!("{}\n", rule_line(60, '=')));
    output.push_str("ACCESSIBILITY AUDIT REPORT - WCAG 2.0 AA\n");
    output.push_str(&format!("{}\n", rule_line(60, '=')));

    output.push_str("\n📊 SUMMARY\n");
    output.push_str(&format!("{}\n", rule_line(40, '-')));
    output.push_str(&format!("Files Analyzed: {}\n", summary.files_analyzed));
    output.push_str(&format!("Total Issues: {}\n", summary.total_issues));
    output.push_str(&format!("  🔴 Critical: {}\n", summary.critical_issues));
    output.push_str(&format!("  🟠 Major: {}\n", summary.major_issues));
    output.push_str(&format!("  🟡 Minor: {}\n", summary.minor_issues));
    output.push_str(&format!("\nCompliance Status: {}\n", summary.wcag_compliance));

    if summary.critical_issues > 0 {
        output.push_str("\n🔴 CRITICAL ISSUES (Must Fix)\n");
        output.push_str(&format!("{}\n", rule_line(40, '-')));
        for issue in report.issues_by_severity.critical.iter().take(TOP_ISSUES) {
            output.push_str(&format!("\n📍 {}\n", issue.location_string()));
            output.push_str(&format!("   Type: {}\n", issue.issue_type));
            output.push_str(&format!("   WCAG: {}\n", issue.wcag_criterion));
            output.push_str(&format!("   Fix: {}\n", issue.recommendation));
        }
    }

    if summary.major_issues > 0 {
        output.push_str("\n🟠 MAJOR ISSUES (Should Fix)\n");
        output.push_str(&format!("{}\n", rule_line(40, '-')));
        for issue in report.issues_by_severity.major.iter().take(TOP_ISSUES) {
            output.push_str(&format!("\n📍 {}\n", issue.location_string()));
            output.push_str(&format!("   Type: {}\n", issue.issue_type));
            output.push_str(&format!("   Fix: {}\n", issue.recommendation));
        }
    }

    output.push_str("\n📈 PATTERN ANALYSIS\n");
    output.push_str(&format!("{}\n", rule_line(40, '-')));
    for (issue_type, count) in report.top_patterns(TOP_PATTERNS) {
        output.push_str(&format!("  {}: {} occurrences\n", issue_type, count));
    }

    output.push_str(&format!("\n{}\n", rule_line(60, '=')));
    output
}

/// Render the rule catalogue as a table for `--list-rules`
pub fn render_catalogue(rules: &[Rule]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<25} {:<9} {:<6} {}\n",
        "RULE", "SEVERITY", "WCAG", "TYPE"
    ));
    for rule in rules {
        output.push_str(&format!(
            "{:<25} {:<9} {:<6} {}\n",
            rule.name,
            rule.severity.to_string(),
            rule.wcag,
            rule.issue_type
        ));
    }

    output
}
