// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan configuration: which files a directory walk picks up.
//!
//! The rule catalogue itself is fixed; only traversal is configurable, from
//! an optional TOML file and CLI overrides.

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Traversal settings for a directory audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions to scan, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names that are never descended into
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js"].map(String::from).to_vec()
}

fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl ScanConfig {
    /// Default exclusions with a custom extension set
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
        .normalized()
    }

    /// Strip leading dots so ".tsx" and "tsx" are equivalent
    pub fn normalized(mut self) -> Self {
        for ext in &mut self.extensions {
            *ext = ext.trim_start_matches('.').to_string();
        }
        self
    }

    /// Whether `path` carries one of the configured extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Whether a single path component is an excluded name
    pub fn is_excluded_name(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|n| self.exclude.iter().any(|e| e == n))
    }

    /// Whether any component of `path` is an excluded name
    pub fn is_excluded_path(&self, path: &Path) -> bool {
        path.components()
            .any(|c| self.is_excluded_name(c.as_os_str()))
    }
}

/// Load configuration from a TOML file, falling back to defaults when absent
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(ScanConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: ScanConfig = toml::from_str(&content).map_err(|source| AuditError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(?config, "Loaded configuration");
    Ok(config.normalized())
}

/// Config file looked up in the working directory when none is given
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".a11y-audit.toml")
}
