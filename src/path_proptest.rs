//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random paths and verify that the
//! ancestry and root helpers agree with each other.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{is_same_or_nested, join, parents, relative, root_of, trim_dir_marker};
    use proptest::prelude::*;

    /// `/`-joined paths of 1..6 non-empty segments
    fn forest_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9._-]{1,8}", 1..6).prop_map(|segments| segments.join("/"))
    }

    // ============================================================================
    // parents property tests
    // ============================================================================

    proptest! {
        /// Property: one ancestor per segment, ending with the sentinel
        #[test]
        fn parents_length_matches_depth(path in forest_path()) {
            let result = parents(&path);
            prop_assert_eq!(result.len(), path.split('/').count());
            prop_assert_eq!(result.last().map(String::as_str), Some(""));
        }

        /// Property: every ancestor contains `path`, nearest first
        #[test]
        fn parents_are_nested_prefixes(path in forest_path()) {
            let result = parents(&path);
            for ancestor in result.iter().filter(|a| !a.is_empty()) {
                prop_assert!(is_same_or_nested(&path, ancestor));
                prop_assert_ne!(ancestor, &path);
            }
            for pair in result.windows(2) {
                prop_assert!(pair[0].len() > pair[1].len());
            }
        }

        /// Property: a trailing slash never changes the ancestry
        #[test]
        fn parents_ignore_trailing_slash(path in forest_path()) {
            let marked = format!("{}/", path);
            prop_assert_eq!(parents(&marked), parents(&path));
            prop_assert_eq!(trim_dir_marker(&marked), path.as_str());
        }
    }

    // ============================================================================
    // root_of / relative / join property tests
    // ============================================================================

    proptest! {
        /// Property: a path is its root joined with its relative part
        #[test]
        fn root_and_relative_rebuild_path(path in forest_path()) {
            prop_assert_eq!(join(root_of(&path), relative(&path)), path.clone());
        }

        /// Property: the relative part is the same under any root
        #[test]
        fn relative_is_root_independent(
            path in forest_path(),
            root in "[a-z]{1,6}",
        ) {
            let moved = join(&root, relative(&path));
            prop_assert_eq!(relative(&moved), relative(&path));
            prop_assert_eq!(root_of(&moved), root.as_str());
        }

        /// Property: a sibling that merely shares a name prefix is not nested
        #[test]
        fn name_prefix_is_not_nesting(path in forest_path(), suffix in "[a-z0-9]{1,4}") {
            let sibling = format!("{}{}", path, suffix);
            prop_assert!(!is_same_or_nested(&sibling, &path));
            prop_assert!(is_same_or_nested(&join(&path, &suffix), &path));
        }
    }
}
