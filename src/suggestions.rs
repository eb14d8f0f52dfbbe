//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use path_scope::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Configuration file not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

use crate::defaults::CONFIG_ENV_VAR;

/// Generate an error for when the configuration file is not found.
///
/// Includes hints about:
/// - Creating a new config file
/// - Using the -c/--config flag
/// - Using the PATH_SCOPE_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a .path-scope.yaml file listing your roots and paths\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set {CONFIG_ENV_VAR} environment variable",
        path = path.display()
    )
}

/// Generate an error for a path whose first segment names no declared root.
///
/// Suggests the closest root name when one is within a small edit distance.
pub fn unknown_root(entry: &str, root: &str, declared: &[&str]) -> anyhow::Error {
    let did_you_mean = find_similar(root, declared)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "Unknown root '{root}' in path: {entry}{did_you_mean}\n\n\
         Declared roots are: {roots}\n\
         hint: Paths start with a root name, e.g. '{example}/src'",
        roots = declared.join(", "),
        example = declared.first().copied().unwrap_or("app")
    )
}

/// Generate an error for a path with empty, `.` or `..` segments.
pub fn path_not_normalized(entry: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Path is not normalized: {entry}\n\n\
         hint: Remove empty, '.' and '..' segments; paths stay inside their root"
    )
}

/// Generate an error for a failed resolution.
///
/// Reminds the caller that nothing was written, so previously applied
/// exclusions remain in effect.
pub fn resolution_failed(error: &crate::error::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to resolve exclusions: {error}\n\n\
         hint: No output was produced; keep the previously applied exclusions\n\
         hint: Check that every root directory is readable"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
