// SPDX-License-Identifier: PMPL-1.0-or-later
//! Structured rendering: the full report as pretty-printed JSON.

use crate::error::Result;
use crate::report::Report;
use std::path::Path;
use tracing::debug;

/// Default destination when `--json` is given without a file name
pub const DEFAULT_OUTPUT: &str = "audit_report.json";

/// Serialize the whole report, every issue included
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the structured report to `path`
pub fn write(report: &Report, path: &Path) -> Result<()> {
    let mut content = render(report)?;
    content.push('\n');
    std::fs::write(path, content)?;
    debug!("Structured report written to {}", path.display());
    Ok(())
}
