// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11y-auditor

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a11y-auditor
#[derive(Error, Debug)]
pub enum AuditError {
    /// The audited path does not exist; fatal to the whole run.
    #[error("Path {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// One file could not be read or decoded; only that file is skipped.
    #[error("Error auditing {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
