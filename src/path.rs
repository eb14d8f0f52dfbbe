//! Path manipulation utilities for path-scope
//!
//! Paths are `/`-separated strings without a leading slash whose first
//! segment names a root. The empty string is the sentinel for the forest of
//! roots itself.

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Return the ancestors of `path`, nearest first, ending with the `""` sentinel.
///
/// A trailing slash marks a directory and is ignored.
///
/// ```
/// use path_scope::path::parents;
///
/// assert_eq!(parents("A/B/C/D"), vec!["A/B/C", "A/B", "A", ""]);
/// assert_eq!(parents("A"), vec![""]);
/// ```
pub fn parents(path: &str) -> Vec<String> {
    let segments: Vec<&str> = trim_dir_marker(path).split(SEPARATOR).collect();

    let mut result: Vec<String> = (1..segments.len())
        .rev()
        .map(|len| segments[..len].join("/"))
        .collect();
    result.push(String::new());
    result
}

/// Drop the trailing slash that marks a directory, if any.
pub fn trim_dir_marker(path: &str) -> &str {
    path.strip_suffix(SEPARATOR).unwrap_or(path)
}

/// Strip the leading root segment from `path`.
///
/// A bare root name and the sentinel both become `""`.
pub fn relative(path: &str) -> &str {
    match path.split_once(SEPARATOR) {
        Some((_, rest)) => rest,
        None => "",
    }
}

/// First segment of `path`: the name of the root it lives in.
pub fn root_of(path: &str) -> &str {
    match path.split_once(SEPARATOR) {
        Some((root, _)) => root,
        None => path,
    }
}

/// Join a child name onto a parent path; joining onto `""` yields the name.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// True when no segment is empty, `.` or `..`; a trailing slash is allowed.
pub fn is_normalized(path: &str) -> bool {
    !trim_dir_marker(path)
        .split(SEPARATOR)
        .any(|segment| matches!(segment, "" | "." | ".."))
}

/// True when `path` is `base` or lies underneath it.
pub fn is_same_or_nested(path: &str, base: &str) -> bool {
    match path.strip_prefix(base) {
        Some("") => true,
        Some(rest) => rest.starts_with(SEPARATOR),
        None => false,
    }
}
