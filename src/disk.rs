//! On-disk forest: named roots mapped to host directories

use std::io;
use std::path::{Path, PathBuf};

use log::trace;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::{self, SEPARATOR};
use crate::reader::DirectoryReader;

/// Named root backed by a directory on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRoot {
    pub name: String,
    pub dir: PathBuf,
}

/// [`DirectoryReader`] over real directories
///
/// `read("")` yields root names in declaration order. Other listings are
/// one level deep and sorted by file name. Symlinks below a root are listed
/// but never followed, so a link back to an ancestor cannot loop.
#[derive(Debug, Clone, Default)]
pub struct DiskReader {
    roots: Vec<DiskRoot>,
}

impl DiskReader {
    pub fn new(roots: Vec<DiskRoot>) -> Self {
        Self { roots }
    }

    /// Add a root
    pub fn with_root<P: Into<PathBuf>>(mut self, name: &str, dir: P) -> Self {
        self.roots.push(DiskRoot {
            name: name.to_string(),
            dir: dir.into(),
        });
        self
    }

    pub fn roots(&self) -> &[DiskRoot] {
        &self.roots
    }

    /// Map a forest path to its host location; `None` for unknown roots.
    pub fn host_path(&self, forest_path: &str) -> Option<PathBuf> {
        let root_name = path::root_of(forest_path);
        let root = self.roots.iter().find(|root| root.name == root_name)?;
        let rest = path::relative(forest_path);
        Some(
            rest.split(SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .fold(root.dir.clone(), |dir, segment| dir.join(segment)),
        )
    }

    fn list(&self, forest_path: &str, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_absent(err.io_error()) => continue,
                Err(err) => return Err(Error::read(forest_path, err)),
            };
            match entry.file_name().to_str() {
                Some(name) => names.push(path::join(forest_path, name)),
                None => {
                    return Err(Error::read(
                        forest_path,
                        format!("non UTF-8 entry name {:?}", entry.file_name()),
                    ))
                }
            }
        }
        Ok(names)
    }
}

/// Errors that mean "nothing there" rather than "could not look".
fn is_absent(err: Option<&io::Error>) -> bool {
    matches!(
        err.map(io::Error::kind),
        Some(io::ErrorKind::NotFound) | Some(io::ErrorKind::NotADirectory)
    )
}

impl DirectoryReader for DiskReader {
    fn read(&self, forest_path: &str) -> Result<Vec<String>> {
        if forest_path.is_empty() {
            return Ok(self.roots.iter().map(|root| root.name.clone()).collect());
        }

        let Some(dir) = self.host_path(forest_path) else {
            return Ok(Vec::new());
        };

        // A root directory may itself be a link; nothing below it is followed
        let metadata = if path::relative(forest_path).is_empty() {
            dir.metadata()
        } else {
            dir.symlink_metadata()
        };
        match metadata {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Ok(Vec::new()),
            Err(err) if is_absent(Some(&err)) => return Ok(Vec::new()),
            Err(err) => return Err(Error::read(forest_path, err)),
        }

        trace!("Listing {} ({})", forest_path, dir.display());
        self.list(forest_path, &dir)
    }

    fn exists(&self, forest_path: &str) -> Result<bool> {
        if forest_path.is_empty() {
            return Ok(true);
        }
        let Some(host) = self.host_path(forest_path) else {
            return Ok(false);
        };
        match host.symlink_metadata() {
            Ok(_) => Ok(true),
            Err(err) if is_absent(Some(&err)) => Ok(false),
            Err(err) => Err(Error::read(forest_path, err)),
        }
    }
}
