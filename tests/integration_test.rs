// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for a11y-auditor

use a11y_auditor::report::{aggregate, json, Compliance};
use a11y_auditor::{scanner, ScanConfig, Severity};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_scan_accessible_fixture() {
    let issues = scanner::scan_file(Path::new("tests/fixtures/accessible.tsx"))
        .expect("scan should succeed");

    assert!(
        issues.is_empty(),
        "Accessible fixture should have no issues, got: {:?}",
        issues.iter().map(|i| i.rule).collect::<Vec<_>>()
    );
}

#[test]
fn test_scan_inaccessible_fixture() {
    let issues = scanner::scan_file(Path::new("tests/fixtures/inaccessible.tsx"))
        .expect("scan should succeed");
    let report = aggregate(&issues);

    assert_eq!(report.summary.total_issues, 10);
    assert_eq!(report.summary.critical_issues, 3);
    assert_eq!(report.summary.major_issues, 5);
    assert_eq!(report.summary.minor_issues, 2);
    assert_eq!(report.compliance(), Compliance::Fail);
}

#[test]
fn test_inaccessible_fixture_lines() {
    let issues = scanner::scan_file(Path::new("tests/fixtures/inaccessible.tsx"))
        .expect("scan should succeed");
    let line_of = |rule: &str| {
        issues
            .iter()
            .find(|i| i.rule == rule)
            .map(|i| i.line_number)
            .unwrap_or_else(|| panic!("no issue for {}", rule))
    };

    assert_eq!(line_of("heading_skip"), 6);
    assert_eq!(line_of("missing_alt"), 8);
    assert_eq!(line_of("generic_alt"), 9);
    assert_eq!(line_of("div_onclick"), 10);
    assert_eq!(line_of("input_no_label"), 12);
    assert_eq!(line_of("color_only"), 14);
    assert_eq!(line_of("button_as_link"), 16);

    let missing_alt = issues.iter().find(|i| i.rule == "missing_alt").unwrap();
    assert_eq!(
        missing_alt.code_snippet,
        "      <h3>Latest news</h3>\n      <img src=\"/hero.png\" />\n      <img src=\"/team.png\" alt=\"photo\" />"
    );
}

#[test]
fn test_scan_fixtures_directory_default_extensions() {
    let issues = scanner::scan_tree(Path::new("tests/fixtures"), &ScanConfig::default());
    let report = aggregate(&issues);

    // index.html is not in the default extension set
    assert_eq!(report.summary.total_issues, 10);
    assert_eq!(report.summary.files_analyzed, 1);
}

#[test]
fn test_scan_fixtures_directory_with_html() {
    let config = ScanConfig::with_extensions(["tsx", "html"]);
    let report = aggregate(&scanner::scan_tree(Path::new("tests/fixtures"), &config));

    assert_eq!(report.summary.total_issues, 12);
    assert_eq!(report.summary.files_analyzed, 2);
    assert_eq!(report.pattern_counts.get("Missing page language"), Some(&1));
    assert_eq!(report.pattern_counts.get("Non-descriptive link text"), Some(&2));

    let files: Vec<&str> = report.issues_by_file.keys().map(String::as_str).collect();
    assert!(files[0].ends_with("inaccessible.tsx"));
    assert!(files[1].ends_with("index.html"));
}

#[test]
fn test_bucket_sizes_match_flat_list() {
    let config = ScanConfig::with_extensions(["tsx", "html"]);
    let issues = scanner::scan_tree(Path::new("tests/fixtures"), &config);
    let report = aggregate(&issues);

    let buckets: usize = Severity::ALL
        .iter()
        .map(|s| report.issues_by_severity.get(*s).len())
        .sum();
    assert_eq!(buckets, report.summary.total_issues);
    assert_eq!(buckets, issues.len());
}

#[test]
fn test_repeat_scan_is_byte_identical() {
    let config = ScanConfig::with_extensions(["tsx", "html"]);
    let first = json::render(&aggregate(&scanner::scan_tree(Path::new("tests/fixtures"), &config)))
        .expect("serializable");
    let second = json::render(&aggregate(&scanner::scan_tree(Path::new("tests/fixtures"), &config)))
        .expect("serializable");

    assert_eq!(first, second);
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("README.md"), "<img src=\"x.png\">").unwrap();

    let report = aggregate(&scanner::scan_tree(dir.path(), &ScanConfig::default()));

    assert_eq!(report.summary.total_issues, 0);
    assert_eq!(report.summary.files_analyzed, 0);
    assert_eq!(report.compliance(), Compliance::PassWithWarnings);
}

#[test]
fn test_vendor_directory_never_scanned() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("packages/ui/node_modules/lib/dist");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("index.tsx"), "<div onClick={f}>x</div>").unwrap();

    assert!(scanner::scan_tree(dir.path(), &ScanConfig::default()).is_empty());
}

#[test]
fn test_json_report_valid() {
    let issues = scanner::scan_file(Path::new("tests/fixtures/inaccessible.tsx"))
        .expect("scan should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&json::render(&aggregate(&issues)).unwrap())
        .expect("JSON report should be valid JSON");

    assert_eq!(parsed["summary"]["wcag_compliance"], "FAIL");
    assert_eq!(parsed["issues_by_severity"]["critical"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["issues_by_severity"]["major"].as_array().unwrap().len(), 5);
    assert_eq!(parsed["issues_by_severity"]["minor"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["issues_by_severity"]["critical"][0]["severity"], "critical");
    assert_eq!(parsed["patterns"]["Skipped heading level"], 1);
}
