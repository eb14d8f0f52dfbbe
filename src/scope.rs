//! # Scoped Exclusions
//!
//! Computes what must be hidden so that only a set of scoped paths, their
//! ancestors and their descendants stay visible.
//!
//! Exclusions are root-relative: one entry hides the same relative path in
//! every root. Consequently a relative path that is scoped in one root stays
//! visible in all of them, and a root with nothing scoped in it is hidden
//! entirely.
//!
//! ## Traversal
//!
//! The tree is never walked. Two bounded passes are made:
//!
//! 1. **Seed**: list the roots and the top level of each root.
//! 2. **Expand**: for every directory on the way to a scoped path, list its
//!    children under every root, one level only.
//!
//! Everything read that is neither scoped, under a scoped path, nor on the
//! way to one is excluded.

use std::collections::BTreeSet;

use log::debug;

use crate::error::Result;
use crate::path;
use crate::reader::{self, DirectoryReader};

/// Root-relative exclusions implied by `scoped_paths`.
///
/// Returns an empty list, without touching the reader, when nothing is
/// scoped. The result is sorted and free of duplicates.
///
/// ```
/// use path_scope::filesystem::MemoryForest;
/// use path_scope::scope::excluded_from_scoped;
///
/// let forest = MemoryForest::from_files(["app/src/main.rs", "app/README.md"]);
/// let excluded = excluded_from_scoped(&["app/src".to_string()], &forest).unwrap();
/// assert_eq!(excluded, vec!["README.md"]);
/// ```
pub fn excluded_from_scoped<R>(scoped_paths: &[String], reader: &R) -> Result<Vec<String>>
where
    R: DirectoryReader + ?Sized,
{
    if scoped_paths.is_empty() {
        return Ok(Vec::new());
    }

    let scoped_paths: Vec<&str> = scoped_paths
        .iter()
        .map(|scoped| path::trim_dir_marker(scoped))
        .collect();
    let on_scoped_route = scoped_routes(&scoped_paths);

    // Seed with the top level of every root
    let roots = reader.read("")?;
    let mut affected = reader::read_all(reader, &roots)?;

    // Expand one level below every directory leading to a scoped path
    let frontier: Vec<String> = on_scoped_route
        .iter()
        .filter(|relative| !relative.is_empty())
        .flat_map(|relative| reader::under_every_root(&roots, relative))
        .collect();
    affected.extend(reader::read_all(reader, &frontier)?);

    let inside_scope: BTreeSet<&str> = affected
        .iter()
        .filter(|candidate| {
            scoped_paths
                .iter()
                .any(|scoped| path::is_same_or_nested(candidate, scoped))
        })
        .map(|candidate| path::relative(candidate))
        .collect();

    let excluded: Vec<String> = affected
        .iter()
        .map(|candidate| path::relative(candidate))
        .filter(|relative| !inside_scope.contains(relative))
        .filter(|relative| !on_scoped_route.contains(*relative))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    debug!(
        "{} scoped path(s) across {} root(s): read {} entries, excluding {}",
        scoped_paths.len(),
        roots.len(),
        affected.len(),
        excluded.len()
    );

    Ok(excluded)
}

/// Root-relative form of every scoped path and each of its ancestors.
///
/// These must stay visible in every root. The set always contains `""`.
fn scoped_routes(scoped_paths: &[&str]) -> BTreeSet<String> {
    scoped_paths
        .iter()
        .flat_map(|scoped| {
            std::iter::once(scoped.to_string())
                .chain(path::parents(scoped))
                .map(|ancestor| path::relative(&ancestor).to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
