//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks the
//! `.path-scope.yaml` configuration file without resolving anything.
//!
//! ## Functionality
//!
//! - **Configuration Validation**: Parses the configuration file and validates
//!   its structure (roots, path list, hidden globs). Errors fail the command.
//! - **Path Existence**: Reports, per listed path, whether it exists under its
//!   root. Missing paths are warnings, since they may appear later.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use log::warn;
use std::path::PathBuf;

use path_scope::config::Config;
use path_scope::defaults::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILENAME};
use path_scope::output::OutputConfig;
use path_scope::path;
use path_scope::reader::DirectoryReader;
use path_scope::resolve::EXCLUDE_PREFIX;

/// Check the configuration and report listed paths that do not exist
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the .path-scope.yaml configuration file to validate.
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV_VAR, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Use strict validation (fail when a listed path is missing).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, output: &OutputConfig) -> Result<()> {
    let config = super::load_config(&args.config)?;
    println!("Configuration: {}", args.config.display());
    println!(
        "   Roots: {}, listed paths: {}",
        config.roots.len(),
        config.paths.len()
    );

    let report = check_paths(&config, output)?;
    for line in &report.lines {
        println!("   {}", line);
    }

    if report.missing == 0 {
        println!("Configuration is valid");
        return Ok(());
    }

    if args.strict {
        return Err(anyhow::anyhow!(
            "Configuration validation failed in strict mode: {} listed path(s) missing",
            report.missing
        ));
    }

    println!(
        "Configuration is valid but {} listed path(s) are missing",
        report.missing
    );
    Ok(())
}

/// Per-path existence lines plus the number of missing paths
#[derive(Debug, Default)]
struct PathReport {
    lines: Vec<String>,
    missing: usize,
}

fn check_paths(config: &Config, output: &OutputConfig) -> Result<PathReport> {
    let reader = config.reader();
    let mut report = PathReport::default();

    for entry in &config.paths {
        let listed = path::trim_dir_marker(entry.strip_prefix(EXCLUDE_PREFIX).unwrap_or(entry));
        if reader.exists(listed)? {
            report.lines.push(output.ok(entry));
        } else {
            warn!("Listed path '{}' does not exist", entry);
            report.lines.push(output.missing(entry));
            report.missing += 1;
        }
    }

    Ok(report)
}
