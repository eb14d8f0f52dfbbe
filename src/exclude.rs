//! # Explicit Exclusions
//!
//! Turns explicitly hidden paths into root-relative exclusions without
//! hiding anything that must stay visible in some other root.
//!
//! A root-relative exclusion applies to every root, so a hidden path can
//! only be emitted when no root still shows it:
//!
//! - **Sub-paths** (`root/a/b`): `a/b` is emitted when, in every root, it is
//!   either hidden too or absent. Being under a listed path counts as
//!   hidden, not only being listed itself: with `!one` and `!two/a/b`
//!   listed, `a/b` is emitted although `one/a/b` is not listed. Such a path
//!   is already hidden in that root, so nothing visible is lost.
//! - **Whole roots** (`root`): each top-level entry of a hidden root is
//!   emitted unless a visible root has an entry with the same name.

use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::path::{self, SEPARATOR};
use crate::reader::{self, DirectoryReader};

/// Root-relative exclusions implied by `excluded_paths`.
///
/// Returns an empty list, without touching the reader, when nothing is
/// excluded. The result is sorted and free of duplicates.
pub fn excluded_from_excluded<R>(excluded_paths: &[String], reader: &R) -> Result<Vec<String>>
where
    R: DirectoryReader + ?Sized,
{
    if excluded_paths.is_empty() {
        return Ok(Vec::new());
    }

    let hidden: BTreeSet<&str> = excluded_paths
        .iter()
        .map(|excluded| path::trim_dir_marker(excluded))
        .collect();
    let roots = reader.read("")?;

    let (hidden_roots, hidden_sub_paths): (Vec<&str>, Vec<&str>) = hidden
        .iter()
        .copied()
        .partition(|excluded| !excluded.contains(SEPARATOR));

    let candidates: Vec<&str> = hidden_sub_paths
        .iter()
        .map(|sub_path| path::relative(sub_path))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let verdicts: Vec<bool> = candidates
        .par_iter()
        .map(|candidate| hidden_in_every_root(candidate, &roots, &hidden, reader))
        .collect::<Result<_>>()?;

    let mut excluded: BTreeSet<String> = candidates
        .iter()
        .zip(verdicts)
        .filter_map(|(candidate, safe)| safe.then(|| candidate.to_string()))
        .collect();

    if !hidden_roots.is_empty() {
        excluded.extend(orphaned_by_hidden_roots(&hidden_roots, &roots, reader)?);
    }

    debug!(
        "{} excluded path(s) ({} whole root(s)) across {} root(s): excluding {}",
        hidden.len(),
        hidden_roots.len(),
        roots.len(),
        excluded.len()
    );

    Ok(excluded.into_iter().collect())
}

/// True when `candidate` is hidden or absent under every root.
fn hidden_in_every_root<R>(
    candidate: &str,
    roots: &[String],
    hidden: &BTreeSet<&str>,
    reader: &R,
) -> Result<bool>
where
    R: DirectoryReader + ?Sized,
{
    let per_root: Vec<bool> = reader::under_every_root(roots, candidate)
        .par_iter()
        .map(|qualified| {
            if is_hidden(qualified, hidden) {
                Ok(true)
            } else {
                reader.exists(qualified).map(|exists| !exists)
            }
        })
        .collect::<Result<_>>()?;

    Ok(per_root.into_iter().all(|safe| safe))
}

/// Listed itself, or lies under a listed path.
fn is_hidden(qualified: &str, hidden: &BTreeSet<&str>) -> bool {
    hidden.contains(qualified)
        || path::parents(qualified)
            .iter()
            .any(|ancestor| !ancestor.is_empty() && hidden.contains(ancestor.as_str()))
}

/// Top-level entries of hidden roots that no visible root also has.
fn orphaned_by_hidden_roots<R>(
    hidden_roots: &[&str],
    roots: &[String],
    reader: &R,
) -> Result<Vec<String>>
where
    R: DirectoryReader + ?Sized,
{
    let top_level = reader::read_all(reader, roots)?;
    let (in_hidden, in_visible): (Vec<&String>, Vec<&String>) = top_level
        .iter()
        .partition(|entry| hidden_roots.contains(&path::root_of(entry)));

    let safe: BTreeSet<&str> = in_visible
        .iter()
        .map(|entry| path::relative(entry))
        .collect();

    Ok(in_hidden
        .iter()
        .map(|entry| path::relative(entry))
        .filter(|relative| !safe.contains(relative))
        .map(str::to_string)
        .collect())
}
