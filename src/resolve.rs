//! # Resolution
//!
//! Entry point of the library: takes the user's mixed path list, where a
//! leading `!` marks a path to hide and anything else a path to keep
//! visible, and returns the root-relative paths to exclude.
//!
//! Both halves are computed concurrently against the same reader and their
//! results merged. Nothing is cached or retained between calls.

use std::collections::BTreeSet;

use log::info;

use crate::error::Result;
use crate::exclude::excluded_from_excluded;
use crate::reader::DirectoryReader;
use crate::scope::excluded_from_scoped;

/// Prefix marking a path to hide in a mixed path list
pub const EXCLUDE_PREFIX: char = '!';

/// A mixed path list split into its two halves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    /// Paths to keep visible, with their ancestors and descendants
    pub scoped: Vec<String>,
    /// Paths to hide, without the `!` prefix
    pub excluded: Vec<String>,
}

impl PathList {
    /// Split `entries` by the `!` prefix, keeping input order.
    pub fn parse<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for entry in entries {
            let entry = entry.as_ref();
            match entry.strip_prefix(EXCLUDE_PREFIX) {
                Some(excluded) => list.excluded.push(excluded.to_string()),
                None => list.scoped.push(entry.to_string()),
            }
        }
        list
    }

    pub fn is_empty(&self) -> bool {
        self.scoped.is_empty() && self.excluded.is_empty()
    }
}

/// Root-relative paths to exclude for a mixed path list.
///
/// The result is sorted and free of duplicates. If either half fails, the
/// whole call fails with that error; callers should then keep whatever
/// exclusions they applied before.
///
/// ```
/// use path_scope::filesystem::MemoryForest;
/// use path_scope::resolve::excluded_paths;
///
/// let forest = MemoryForest::from_files([
///     "app/src/main.rs",
///     "app/src/generated.rs",
///     "app/README.md",
/// ]);
/// let excluded = excluded_paths(["app/src", "!app/src/generated.rs"], &forest).unwrap();
/// assert_eq!(excluded, vec!["README.md", "src/generated.rs"]);
/// ```
pub fn excluded_paths<I, S, R>(entries: I, reader: &R) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: DirectoryReader + ?Sized,
{
    resolve(&PathList::parse(entries), reader)
}

/// Like [`excluded_paths`], for an already split list.
pub fn resolve<R>(list: &PathList, reader: &R) -> Result<Vec<String>>
where
    R: DirectoryReader + ?Sized,
{
    let (from_scoped, from_excluded) = rayon::join(
        || excluded_from_scoped(&list.scoped, reader),
        || excluded_from_excluded(&list.excluded, reader),
    );

    let merged: BTreeSet<String> = from_scoped?.into_iter().chain(from_excluded?).collect();

    info!(
        "Resolved {} scoped and {} excluded path(s) into {} exclusion(s)",
        list.scoped.len(),
        list.excluded.len(),
        merged.len()
    );

    Ok(merged.into_iter().collect())
}
