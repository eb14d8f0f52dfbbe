//! CLI argument parsing and command dispatch

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;
use path_scope::output::OutputConfig;

/// Path Scope - Hide everything in a multi-root tree except the paths you choose
#[derive(Parser, Debug)]
#[command(name = "path-scope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the paths to exclude for the configured scope
    Resolve(commands::resolve::ResolveArgs),

    /// Preview the tree that stays visible once exclusions are applied
    Tree(commands::tree::TreeArgs),

    /// Check the configuration and report listed paths that do not exist
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Resolve(args) => commands::resolve::execute(args),
            Commands::Tree(args) => commands::tree::execute(args, &output),
            Commands::Validate(args) => commands::validate::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialize `env_logger` at `level`; `RUST_LOG`, when set, takes precedence.
fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level.parse().map_err(|_| {
        anyhow!(
            "Invalid log level: {level}\n\n\
             hint: Use one of off, error, warn, info, debug, trace"
        )
    })?;

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    Ok(())
}
