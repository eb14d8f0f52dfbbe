//! # Path Scope Library
//!
//! This library computes the exclude patterns that narrow a multi-root file
//! tree down to a handful of chosen paths. It backs the `path-scope`
//! command-line tool and can be embedded by any host that applies
//! root-relative exclude globs uniformly across its roots.
//!
//! ## Quick Example
//!
//! ```
//! use path_scope::filesystem::MemoryForest;
//! use path_scope::resolve::excluded_paths;
//!
//! let forest = MemoryForest::from_files([
//!     "workspace-folder-1/folder-1/file-1",
//!     "workspace-folder-1/folder-2/file-1",
//!     "workspace-folder-1/folder-2/file-2",
//!     "workspace-folder-1/file-1",
//!     "workspace-folder-1/file-2",
//! ]);
//!
//! let excluded = excluded_paths(["workspace-folder-1/folder-2/file-1"], &forest).unwrap();
//! assert_eq!(excluded, vec!["file-1", "file-2", "folder-1", "folder-2/file-2"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Paths (`path`)**: `/`-separated, rooted at a root name; `""` stands
//!   for the forest of roots.
//! - **Readers (`reader`, `filesystem`, `disk`, `cache`)**: the only way the
//!   resolver looks at a tree, one directory level at a time.
//! - **Scoping (`scope`)**: exclusions that keep scoped paths, their
//!   ancestors and descendants visible.
//! - **Hiding (`exclude`)**: exclusions for explicitly hidden paths that
//!   never hide something another root still shows.
//! - **Resolution (`resolve`)**: splits a mixed list and merges both.
//! - **Patterns (`patterns`)**: host exclude-pattern serialization.
//!
//! ## Root-relative semantics
//!
//! An exclusion hides the same relative path in every root. A path kept
//! visible in one root therefore stays visible wherever that relative path
//! exists, and a root without scoped content disappears entirely.

pub mod cache;
pub mod config;
pub mod defaults;
pub mod disk;
pub mod error;
pub mod exclude;
pub mod filesystem;
pub mod output;
pub mod path;
pub mod patterns;
pub mod reader;
pub mod resolve;
pub mod scope;
pub mod suggestions;

#[cfg(test)]
mod path_proptest;
#[cfg(test)]
mod resolve_proptest;
