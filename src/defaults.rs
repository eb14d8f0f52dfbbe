//! Default values for path-scope configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILENAME: &str = ".path-scope.yaml";

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "PATH_SCOPE_CONFIG";

/// System and VCS entries hidden regardless of scoping.
pub const ALWAYS_HIDDEN: &[&str] = &[".git", ".svn", ".hg", "CVS", ".DS_Store", "Thumbs.db"];
