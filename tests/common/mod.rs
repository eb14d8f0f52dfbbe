//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_sample_roots();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Two roots, one scoped folder.
    pub const SCOPED: &str = r#"
roots:
  - name: workspace-folder-1
    path: workspace-folder-1
  - name: workspace-folder-2
    path: workspace-folder-2
paths:
  - workspace-folder-1/folder-2
"#;

    /// Two roots, a scoped folder with one of its files hidden again.
    pub const MIXED: &str = r#"
roots:
  - name: workspace-folder-1
    path: workspace-folder-1
  - name: workspace-folder-2
    path: workspace-folder-2
paths:
  - workspace-folder-1/folder-2
  - "!workspace-folder-1/folder-2/file-2"
"#;

    /// Two roots and no paths.
    pub const EMPTY_LIST: &str = r#"
roots:
  - name: workspace-folder-1
    path: workspace-folder-1
  - name: workspace-folder-2
    path: workspace-folder-2
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// Files of the two sample roots
pub const SAMPLE_FILES: &[&str] = &[
    "workspace-folder-1/folder-1/file-1",
    "workspace-folder-1/folder-2/file-1",
    "workspace-folder-1/folder-2/file-2",
    "workspace-folder-1/file-1",
    "workspace-folder-1/file-2",
    "workspace-folder-2/folder-3/file-1",
    "workspace-folder-2/file-3",
];

/// A test fixture that provides a temporary directory with roots and config.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_sample_roots()
///     .with_config(configs::SCOPED);
///
/// let mut cmd = cargo_bin_cmd!("path-scope");
/// cmd.current_dir(fixture.path())
///     .arg("resolve")
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.path-scope.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".path-scope.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add an empty file at the given path.
    pub fn with_file(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str("")
            .expect("Failed to write file");
        self
    }

    /// Populate the two sample roots.
    pub fn with_sample_roots(self) -> Self {
        SAMPLE_FILES
            .iter()
            .fold(self, |fixture, file| fixture.with_file(file))
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".path-scope.yaml")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
