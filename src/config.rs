//! # Configuration File
//!
//! This module defines the `.path-scope.yaml` file: which directories make up
//! the forest of roots, and which paths are scoped or hidden.
//!
//! ```yaml
//! roots:
//!   - name: app
//!     path: ./app
//!   - name: lib
//!     path: ../shared/lib
//! paths:
//!   - app/src
//!   - "!app/src/generated"
//! hidden:
//!   - node_modules
//! ```
//!
//! Root directories are resolved against the directory holding the
//! configuration file. The loader only validates structure; whether a listed
//! path exists on disk is reported by the `validate` command, not enforced
//! here, because paths may legitimately appear later.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::disk::{DiskReader, DiskRoot};
use crate::error::{Error, Result};
use crate::path::{self, SEPARATOR};
use crate::resolve::{PathList, EXCLUDE_PREFIX};

/// One named root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    /// Name used as the first segment of every path in this root
    pub name: String,
    /// Directory on disk, relative to the configuration file
    pub path: PathBuf,
}

/// Parsed `.path-scope.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub roots: Vec<RootConfig>,
    /// Mixed path list; a leading `!` marks a hidden path
    #[serde(default)]
    pub paths: Vec<String>,
    /// Extra names hidden everywhere, as globs matched per path segment
    #[serde(default)]
    pub hidden: Vec<String>,
    /// Directory the root paths are relative to; set by [`from_file`]
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    /// The path list split into scoped and hidden halves
    pub fn path_list(&self) -> PathList {
        PathList::parse(&self.paths)
    }

    /// Reader over the configured roots, resolved against `base_dir`
    pub fn reader(&self) -> DiskReader {
        DiskReader::new(
            self.roots
                .iter()
                .map(|root| DiskRoot {
                    name: root.name.clone(),
                    dir: self.base_dir.join(&root.path),
                })
                .collect(),
        )
    }

    fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(Error::ConfigParse {
                message: "no roots declared".to_string(),
                hint: Some("Add a 'roots:' list with at least one 'name' and 'path'".to_string()),
            });
        }

        let mut names = HashSet::new();
        for root in &self.roots {
            if root.name.is_empty() || root.name.contains(SEPARATOR) {
                return Err(Error::ConfigParse {
                    message: format!("invalid root name '{}'", root.name),
                    hint: Some("Root names must be non-empty and must not contain '/'".to_string()),
                });
            }
            if !names.insert(root.name.as_str()) {
                return Err(Error::ConfigParse {
                    message: format!("duplicate root name '{}'", root.name),
                    hint: Some("Give every root a distinct name".to_string()),
                });
            }
        }

        for entry in &self.paths {
            let listed = entry.strip_prefix(EXCLUDE_PREFIX).unwrap_or(entry);
            if listed.is_empty() {
                return Err(Error::ConfigParse {
                    message: format!("empty path entry '{}'", entry),
                    hint: None,
                });
            }
            if listed.starts_with(SEPARATOR) {
                return Err(Error::ConfigParse {
                    message: format!("path '{}' starts with '/'", entry),
                    hint: Some(
                        "Paths start with a root name, e.g. 'app/src' rather than '/app/src'"
                            .to_string(),
                    ),
                });
            }
            if !path::is_normalized(listed) {
                return Err(Error::ConfigParse {
                    message: format!("path '{}' is not normalized", entry),
                    hint: Some(
                        "Remove empty, '.' and '..' segments; paths stay inside their root"
                            .to_string(),
                    ),
                });
            }
            if !names.contains(path::root_of(listed)) {
                return Err(Error::ConfigParse {
                    message: format!(
                        "path '{}' does not start with a declared root name",
                        entry
                    ),
                    hint: Some(format!(
                        "Declared roots: {}",
                        self.roots
                            .iter()
                            .map(|root| root.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )),
                });
            }
        }

        for pattern in &self.hidden {
            glob::Pattern::new(pattern)?;
        }

        Ok(())
    }
}

/// Parse and validate configuration from a YAML string.
///
/// Root paths stay relative to the current directory; use [`from_file`] to
/// anchor them at the configuration file.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml_content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file, anchoring roots at its directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let mut config = parse(&content)?;
    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(config)
}
