//! # Error Handling
//!
//! This module defines the error type shared by the resolver, the directory
//! readers and the configuration loader. It uses `thiserror` to derive
//! descriptive messages for every failure mode.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of everything that can go wrong inside the
//!   library. Each variant carries enough context (the offending path, a
//!   hint) to be reported to a user without further decoration.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A path that does not exist, or that is not a directory, is never an error
//! for a directory reader: it reads as an empty listing. Only faults that
//! make the listing untrustworthy (permissions, I/O, transport) surface as
//! `Error::Read`, and the resolver propagates those unchanged.

use thiserror::Error;

/// Main error type for path-scope operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory reader failed to list or check a path.
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// The configuration file is malformed or inconsistent.
    ///
    /// Carries an optional hint about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A mutex guarding a cache has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

impl Error {
    /// Build a `Read` error for `path` from any displayable cause.
    pub fn read(path: &str, cause: impl std::fmt::Display) -> Self {
        Error::Read {
            path: path.to_string(),
            message: cause.to_string(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
