// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-auditor CLI - static WCAG 2.0 AA accessibility auditor

use a11y_auditor::config::{self, ScanConfig};
use a11y_auditor::report::{self, console, json};
use a11y_auditor::rules;
use a11y_auditor::scanner;
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Static WCAG 2.0 AA accessibility auditor for JSX/TSX and HTML sources
#[derive(Parser)]
#[command(name = "a11y-auditor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// File or directory to audit
    #[arg(required_unless_present = "list_rules")]
    path: Option<PathBuf>,

    /// Also write the full report as JSON
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = json::DEFAULT_OUTPUT
    )]
    json: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// File extension to scan (repeatable, replaces configured extensions)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Directory name to skip (repeatable, replaces configured exclusions)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Print the rule catalogue and exit
    #[arg(long)]
    list_rules: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "a11y_auditor=debug"
    } else {
        "a11y_auditor=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(cli.verbose);

    if cli.list_rules {
        print!("{}", console::render_catalogue(rules::catalogue()));
        return ExitCode::SUCCESS;
    }

    let Some(path) = cli.path.as_deref() else {
        eprintln!("Usage: a11y-auditor <PATH> [--json [FILE]]");
        return ExitCode::FAILURE;
    };

    match run(&cli, path) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, path: &Path) -> anyhow::Result<ExitCode> {
    let scan_config = resolve_config(cli)?;
    let issues = scanner::scan_path(path, &scan_config)?;
    let report = report::aggregate(&issues);

    let mut json_failed = false;
    if let Some(out) = cli.json.as_deref() {
        match json::write(&report, out) {
            Ok(()) => println!("Report saved to {}", out.display()),
            Err(e) => {
                error!("Failed to write {}: {}", out.display(), e);
                json_failed = true;
            }
        }
    }

    // The console summary is printed even when the JSON write failed.
    print!("{}", console::render(&report));

    if json_failed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::from(report.exit_code()))
}

/// Config file, then CLI overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<ScanConfig> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    let mut scan_config = config::load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if !cli.extensions.is_empty() {
        scan_config.extensions = cli.extensions.clone();
    }
    if !cli.exclude.is_empty() {
        scan_config.exclude = cli.exclude.clone();
    }

    Ok(scan_config.normalized())
}
