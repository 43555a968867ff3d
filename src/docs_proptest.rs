//! Property-based tests for docs discovery.
//!
//! Random directory trees are built on disk from a small set of segment
//! names, so `docs` and `website` show up often and at every depth.

#[cfg(test)]
mod proptest_tests {
    use crate::docs::{find_docs_directories, is_docs_entry};
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn segment() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["docs", "website", "examples", "internal", "docs-legacy", "src"])
    }

    fn dir_tree() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
        prop::collection::vec(prop::collection::vec(segment(), 1..5), 0..8)
    }

    /// Every directory the tree creates, including intermediate ones.
    fn all_dirs(tree: &[Vec<&'static str>]) -> BTreeSet<Vec<&'static str>> {
        tree.iter()
            .flat_map(|path| (1..=path.len()).map(move |n| path[..n].to_vec()))
            .collect()
    }

    fn build(tree: &[Vec<&'static str>]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for path in tree {
            fs::create_dir_all(temp.path().join(path.join("/"))).unwrap();
        }
        temp
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: exactly `docs` and `website/docs` are reported, whenever they exist
        #[test]
        fn reports_only_root_and_website_docs(tree in dir_tree()) {
            let temp = build(&tree);
            let found = find_docs_directories(temp.path()).unwrap();

            let expected: BTreeSet<PathBuf> = all_dirs(&tree)
                .into_iter()
                .filter(|dir| dir.as_slice() == ["docs"] || dir.as_slice() == ["website", "docs"])
                .map(|dir| dir.iter().collect())
                .collect();

            prop_assert_eq!(found, expected);
        }

        /// Property: discovery does not depend on how often it runs
        #[test]
        fn discovery_is_repeatable(tree in dir_tree()) {
            let temp = build(&tree);
            let first = find_docs_directories(temp.path()).unwrap();
            let second = find_docs_directories(temp.path()).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: every kept top-level entry is the first segment of a docs root
        #[test]
        fn kept_entries_lead_to_docs(tree in dir_tree()) {
            let temp = build(&tree);
            let found = find_docs_directories(temp.path()).unwrap();

            for entry in fs::read_dir(temp.path()).unwrap() {
                let name = entry.unwrap().file_name().to_string_lossy().to_string();
                let leads_to_docs = found
                    .iter()
                    .any(|docs| docs.iter().next().is_some_and(|first| first == name.as_str()));
                prop_assert_eq!(is_docs_entry(&name, &found), leads_to_docs);
            }
        }
    }
}
