//! Property-based tests for exclusion resolution.
//!
//! Random forests of up to three roots are generated together with scoped
//! and hidden paths picked from their entries, and the resolver's output is
//! checked against the visibility guarantees it promises.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use crate::cache::CachedReader;
    use crate::filesystem::MemoryForest;
    use crate::path::{self, is_same_or_nested, join, relative, root_of};
    use crate::resolve::{resolve, PathList};
    use proptest::prelude::*;

    /// A forest and paths picked from it
    #[derive(Debug, Clone)]
    struct Case {
        files: Vec<String>,
        picked: Vec<String>,
    }

    impl Case {
        fn forest(&self) -> MemoryForest {
            MemoryForest::from_files(&self.files)
        }

        /// Every entry below the sentinel, roots included
        fn all_paths(&self) -> BTreeSet<String> {
            self.files
                .iter()
                .flat_map(|file| {
                    path::parents(file)
                        .into_iter()
                        .filter(|parent| !parent.is_empty())
                        .chain(std::iter::once(file.clone()))
                })
                .collect()
        }

        fn roots(&self) -> BTreeSet<String> {
            self.files
                .iter()
                .map(|file| root_of(file).to_string())
                .collect()
        }
    }

    /// Files under roots `r0..r2`; directories are named `a..c` and files
    /// `x..y`, so no path is ever both a file and a directory.
    fn arb_files() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            (0..3usize, prop::collection::vec("[abc]", 0..3), "[xy]"),
            1..12,
        )
        .prop_map(|files| {
            files
                .into_iter()
                .map(|(root, dirs, leaf)| {
                    let mut segments = vec![format!("r{}", root)];
                    segments.extend(dirs);
                    segments.push(leaf);
                    segments.join("/")
                })
                .collect()
        })
    }

    /// Picks prefixes of generated files with at least `min_depth` segments
    /// below the root.
    fn arb_case(min_depth: usize) -> impl Strategy<Value = Case> {
        arb_files()
            .prop_flat_map(move |files| {
                let count = files.len();
                (
                    Just(files),
                    prop::collection::vec((0..count, min_depth..4usize), 1..4),
                )
            })
            .prop_map(|(files, picks)| {
                let picked = picks
                    .into_iter()
                    .map(|(index, depth)| {
                        let segments: Vec<&str> = files[index].split('/').collect();
                        let depth = depth.min(segments.len() - 1);
                        segments[..=depth].join("/")
                    })
                    .collect();
                Case { files, picked }
            })
    }

    fn scoped(case: &Case) -> PathList {
        PathList {
            scoped: case.picked.clone(),
            excluded: vec![],
        }
    }

    fn hidden(case: &Case) -> PathList {
        PathList {
            scoped: vec![],
            excluded: case.picked.clone(),
        }
    }

    fn is_sorted_and_unique(paths: &[String]) -> bool {
        paths.windows(2).all(|pair| pair[0] < pair[1])
    }

    proptest! {
        /// Property: output is sorted and free of duplicates
        #[test]
        fn output_is_sorted_and_unique(case in arb_case(0)) {
            let forest = case.forest();
            prop_assert!(is_sorted_and_unique(&resolve(&scoped(&case), &forest).unwrap()));
            prop_assert!(is_sorted_and_unique(&resolve(&hidden(&case), &forest).unwrap()));
        }

        /// Property: repeated calls with stable inputs agree
        #[test]
        fn resolution_is_idempotent(case in arb_case(0)) {
            let forest = case.forest();
            let list = PathList {
                scoped: case.picked.clone(),
                excluded: case.picked.iter().rev().take(1).cloned().collect(),
            };
            prop_assert_eq!(resolve(&list, &forest).unwrap(), resolve(&list, &forest).unwrap());
        }

        /// Property: a caching wrapper never changes the result
        #[test]
        fn cached_reader_is_transparent(case in arb_case(0)) {
            let forest = case.forest();
            let cached = CachedReader::new(&forest);
            for list in [scoped(&case), hidden(&case)] {
                let expected = resolve(&list, &forest).unwrap();
                prop_assert_eq!(resolve(&list, &cached).unwrap(), expected.clone());
                prop_assert_eq!(resolve(&list, &cached).unwrap(), expected);
            }
        }

        /// Property: scoped paths, their ancestors and their descendants in
        /// the scoped root are never hidden
        #[test]
        fn scoped_paths_stay_visible(case in arb_case(0)) {
            let excluded = resolve(&scoped(&case), &case.forest()).unwrap();
            let all_paths = case.all_paths();

            for scoped_path in &case.picked {
                let related = all_paths.iter().filter(|candidate| {
                    candidate.contains('/')
                        && root_of(candidate) == root_of(scoped_path)
                        && (is_same_or_nested(candidate, scoped_path)
                            || is_same_or_nested(scoped_path, candidate))
                });
                for visible in related {
                    for exclusion in &excluded {
                        prop_assert!(
                            !is_same_or_nested(relative(visible), exclusion),
                            "'{}' hides '{}' kept by scope '{}'",
                            exclusion,
                            visible,
                            scoped_path
                        );
                    }
                }
            }
        }

        /// Property: top-level entries unrelated to every scoped path are hidden
        #[test]
        fn unrelated_top_level_entries_are_hidden(case in arb_case(1)) {
            let excluded = resolve(&scoped(&case), &case.forest()).unwrap();
            let scoped_tops: BTreeSet<&str> = case
                .picked
                .iter()
                .map(|scoped_path| root_of(relative(scoped_path)))
                .collect();

            for entry in case.all_paths().iter().filter(|p| p.matches('/').count() == 1) {
                let name = relative(entry);
                if !scoped_tops.contains(name) {
                    prop_assert!(
                        excluded.iter().any(|exclusion| exclusion == name),
                        "'{}' should be excluded, got {:?}",
                        name,
                        excluded
                    );
                }
            }
        }

        /// Property: under every root, each child of a directory on the way
        /// to a scoped path is hidden unless it is on such a way itself or
        /// lies inside a scoped path in some root
        #[test]
        fn off_route_children_are_hidden_at_every_depth(case in arb_case(0)) {
            let excluded = resolve(&scoped(&case), &case.forest()).unwrap();
            let all_paths = case.all_paths();
            let roots = case.roots();

            let routes: BTreeSet<String> = case
                .picked
                .iter()
                .flat_map(|scoped_path| {
                    path::parents(scoped_path)
                        .into_iter()
                        .chain(std::iter::once(scoped_path.clone()))
                        .map(|ancestor| relative(&ancestor).to_string())
                        .collect::<Vec<_>>()
                })
                .collect();

            let inside_scope = |candidate: &str| {
                roots.iter().any(|root| {
                    let qualified = join(root, candidate);
                    all_paths.contains(&qualified)
                        && case
                            .picked
                            .iter()
                            .any(|scoped_path| is_same_or_nested(&qualified, scoped_path))
                })
            };

            for root in &roots {
                for route in &routes {
                    let node = join(root, route);
                    let children = all_paths.iter().filter(|candidate| {
                        path::parents(candidate).first().map(String::as_str) == Some(node.as_str())
                    });
                    for child in children {
                        let name = relative(child);
                        if routes.contains(name) || inside_scope(name) {
                            continue;
                        }
                        prop_assert!(
                            excluded.iter().any(|exclusion| exclusion == name),
                            "'{}' under '{}' should be excluded, got {:?}",
                            name,
                            node,
                            excluded
                        );
                    }
                }
            }
        }

        /// Property: an exclusion from hidden paths never hides an entry that
        /// some root still shows
        #[test]
        fn hidden_paths_never_leak_into_other_roots(case in arb_case(0)) {
            let excluded = resolve(&hidden(&case), &case.forest()).unwrap();
            let all_paths = case.all_paths();
            let listed: BTreeSet<&str> = case.picked.iter().map(String::as_str).collect();

            for exclusion in &excluded {
                for root in case.roots() {
                    let qualified = join(&root, exclusion);
                    if !all_paths.contains(&qualified) {
                        continue;
                    }
                    let hidden_here = listed.contains(qualified.as_str())
                        || path::parents(&qualified)
                            .iter()
                            .any(|ancestor| listed.contains(ancestor.as_str()));
                    prop_assert!(
                        hidden_here,
                        "'{}' hides '{}', which is not hidden",
                        exclusion,
                        qualified
                    );
                }
            }
        }
    }
}
