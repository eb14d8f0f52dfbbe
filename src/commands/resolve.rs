//! # Resolve Command Implementation
//!
//! This module implements the `resolve` subcommand, which prints the
//! root-relative paths to exclude so that only the configured scope stays
//! visible.
//!
//! ## Functionality
//!
//! - **Configured scope**: Uses the `paths:` list of the configuration file.
//! - **Ad-hoc scope**: Positional paths replace the configured list for one run.
//! - **Formats**: One path per line, or a JSON exclude-settings object that
//!   also carries the always-hidden system entries.
//!
//! Output is assembled in full before anything is printed. When resolution
//! fails the command exits non-zero with an empty stdout, so a caller piping
//! the result into its settings keeps its previous exclusions.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use path_scope::cache::CachedReader;
use path_scope::config::Config;
use path_scope::defaults::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILENAME};
use path_scope::path;
use path_scope::patterns::ExcludeSettings;
use path_scope::resolve::{resolve, PathList, EXCLUDE_PREFIX};
use path_scope::suggestions;

/// Print the paths to exclude for the configured scope
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the .path-scope.yaml configuration file.
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV_VAR, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "list")]
    pub format: OutputFormat,

    /// Paths to scope instead of the configured list; prefix with '!' to hide.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Output formats for resolved exclusions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One root-relative path per line
    #[default]
    List,
    /// JSON object of exclude patterns, including always-hidden entries
    Json,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let rendered = render(&config, &args.paths, args.format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

/// Resolve and format without printing.
fn render(config: &Config, paths: &[String], format: OutputFormat) -> Result<String> {
    let list = if paths.is_empty() {
        config.path_list()
    } else {
        check_roots(config, paths)?;
        PathList::parse(paths)
    };

    let reader = CachedReader::new(config.reader());
    let excluded = resolve(&list, &reader).map_err(|e| suggestions::resolution_failed(&e))?;

    match format {
        OutputFormat::List => Ok(excluded.join("\n")),
        OutputFormat::Json => Ok(ExcludeSettings::new(&excluded, &config.hidden).to_json()?),
    }
}

/// Reject ad-hoc paths that escape their root or name no declared root.
fn check_roots(config: &Config, paths: &[String]) -> Result<()> {
    let declared: Vec<&str> = config.roots.iter().map(|root| root.name.as_str()).collect();
    for entry in paths {
        let listed = entry.strip_prefix(EXCLUDE_PREFIX).unwrap_or(entry);
        if !path::is_normalized(listed) {
            return Err(suggestions::path_not_normalized(entry));
        }
        let root = path::root_of(listed);
        if !declared.contains(&root) {
            return Err(suggestions::unknown_root(entry, root, &declared));
        }
    }
    Ok(())
}
