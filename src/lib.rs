// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-auditor - static WCAG 2.0 AA accessibility auditor
//!
//! Scans JSX/TSX and HTML-bearing sources with a fixed catalogue of textual
//! detectors and aggregates the hits into a severity-classified report.
//!
//! ## Pipeline
//!
//! - **Rules** (`rules`): ordered catalogue of detectors with WCAG metadata
//! - **Scanner** (`scanner`): per-file matching and directory traversal
//! - **Report** (`report`): aggregation, console and JSON rendering
//! - **Config** (`config`): scanned extensions and excluded directories
//!
//! Detectors work on raw text. There is no DOM, so results are advisory.

pub mod config;
pub mod error;
pub mod issue;
pub mod report;
pub mod rules;
pub mod scanner;

pub use config::ScanConfig;
pub use error::{AuditError, Result};
pub use issue::{Issue, Severity};
pub use report::{aggregate, Compliance, Report};
