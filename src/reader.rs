//! The directory-listing capability the resolver is built on.
//!
//! The resolver never walks a tree by itself. It asks a [`DirectoryReader`]
//! for the immediate children of the few directories it needs, so the backing
//! store can be slow, remote or virtual. Readers must be `Sync`: independent
//! reads are fanned out on the rayon pool.

use rayon::prelude::*;

use crate::error::Result;
use crate::path;

/// Lists immediate children of directories in a forest of named roots.
///
/// Contract:
/// - `read("")` returns the root names.
/// - `read(p)` returns `p` joined with each child name.
/// - A missing or non-directory `p` reads as an empty list and `exists`
///   answers `false`; neither is an error.
/// - Any other failure is returned as an error and is never masked by the
///   resolver.
pub trait DirectoryReader: Send + Sync {
    /// List the immediate children of `path`.
    fn read(&self, path: &str) -> Result<Vec<String>>;

    /// Check whether `path` exists.
    fn exists(&self, path: &str) -> Result<bool>;
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for &R {
    fn read(&self, path: &str) -> Result<Vec<String>> {
        (**self).read(path)
    }

    fn exists(&self, path: &str) -> Result<bool> {
        (**self).exists(path)
    }
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for Box<R> {
    fn read(&self, path: &str) -> Result<Vec<String>> {
        (**self).read(path)
    }

    fn exists(&self, path: &str) -> Result<bool> {
        (**self).exists(path)
    }
}

/// Read every path in `paths` concurrently and concatenate the listings.
///
/// Output order follows `paths`. The first failure aborts the whole batch.
pub(crate) fn read_all<R: DirectoryReader + ?Sized>(
    reader: &R,
    paths: &[String],
) -> Result<Vec<String>> {
    let listings: Vec<Vec<String>> = paths
        .par_iter()
        .map(|path| reader.read(path))
        .collect::<Result<_>>()?;
    Ok(listings.into_iter().flatten().collect())
}

/// Qualify a root-relative path with every root name.
pub(crate) fn under_every_root(roots: &[String], relative: &str) -> Vec<String> {
    roots.iter().map(|root| path::join(root, relative)).collect()
}
