//! # CLI Command Implementations
//!
//! Each subcommand of `path-scope` lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `path_scope` library.

pub mod completions;
pub mod resolve;
pub mod tree;
pub mod validate;

use anyhow::Result;
use std::path::Path;

use path_scope::config::{self, Config};

/// Load the configuration file, with hints when it is missing.
pub fn load_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Err(path_scope::suggestions::config_not_found(config_path));
    }

    config::from_file(config_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
        )
    })
}
