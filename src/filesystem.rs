//! In-memory forest of roots implementing [`DirectoryReader`]

use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};
use crate::path::{self, SEPARATOR};
use crate::reader::DirectoryReader;

/// Kind of an entry in the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// In-memory forest for tests, benchmarks and previews
///
/// Adding `root/a/b` implicitly creates the directories `root` and
/// `root/a`. Listings come back sorted by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryForest {
    /// Every entry keyed by its full path
    entries: BTreeMap<String, EntryKind>,
    /// Paths whose reads fail, to exercise error propagation
    faults: HashSet<String>,
}

impl MemoryForest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forest from file paths
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut forest = Self::new();
        for file in files {
            forest.add_file(file.as_ref());
        }
        forest
    }

    /// Add a file, creating its parent directories
    pub fn add_file(&mut self, path: &str) {
        self.add_parents(path);
        self.entries.insert(path.to_string(), EntryKind::File);
    }

    /// Add a directory, creating its parent directories
    pub fn add_dir(&mut self, path: &str) {
        let path = path.strip_suffix(SEPARATOR).unwrap_or(path);
        self.add_parents(path);
        self.entries.insert(path.to_string(), EntryKind::Directory);
    }

    fn add_parents(&mut self, path: &str) {
        for parent in path::parents(path) {
            if !parent.is_empty() {
                self.entries.insert(parent, EntryKind::Directory);
            }
        }
    }

    /// Make every `read` and `exists` on `path` fail
    pub fn fail_on(&mut self, path: &str) {
        self.faults.insert(path.to_string());
    }

    /// Kind of the entry at `path`, if any
    pub fn kind(&self, path: &str) -> Option<EntryKind> {
        self.entries.get(path).copied()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the forest is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_fault(&self, path: &str) -> Result<()> {
        if self.faults.contains(path) {
            return Err(Error::read(path, "injected fault"));
        }
        Ok(())
    }
}

impl DirectoryReader for MemoryForest {
    fn read(&self, dir: &str) -> Result<Vec<String>> {
        self.check_fault(dir)?;

        if dir.is_empty() {
            return Ok(self
                .entries
                .keys()
                .filter(|key| !key.contains(SEPARATOR))
                .cloned()
                .collect());
        }

        if self.kind(dir) != Some(EntryKind::Directory) {
            return Ok(Vec::new());
        }

        let prefix = format!("{dir}{SEPARATOR}");
        Ok(self
            .entries
            .range(prefix.clone()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(&prefix))
            .filter(|key| !key[prefix.len()..].contains(SEPARATOR))
            .cloned()
            .collect())
    }

    fn exists(&self, path: &str) -> Result<bool> {
        self.check_fault(path)?;
        Ok(path.is_empty() || self.entries.contains_key(path))
    }
}
