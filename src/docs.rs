//! # Documentation Directory Discovery
//!
//! Finds the documentation roots of a mirrored repository. A directory
//! qualifies when it is named `docs` and sits either at the repository root or
//! directly under a root-level `website` directory:
//!
//! ```text
//! docs/                 qualifies
//! website/docs/         qualifies
//! contributing/docs/    rejected (other parent)
//! deep/nested/docs/     rejected (too deep)
//! ```
//!
//! The whole tree is walked because several roots may coexist. Any error
//! during the walk aborts discovery and no partial result is returned.

use crate::defaults::{DOCS_DIR_NAME, GIT_DIR_NAME, WEBSITE_DIR_NAME};
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Find every documentation root under `root`, as paths relative to `root`.
///
/// The returned set is ordered, so `docs` comes before `website/docs`.
pub fn find_docs_directories(root: &Path) -> Result<BTreeSet<PathBuf>> {
    let mut paths = BTreeSet::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|source| Error::Discovery {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_dir() || entry.file_name() != DOCS_DIR_NAME {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if is_docs_root(relative) {
            paths.insert(relative.to_path_buf());
        }
    }

    Ok(paths)
}

/// Whether a relative path names a qualifying documentation root.
pub fn is_docs_root(relative: &Path) -> bool {
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    match parts.as_slice() {
        [name] => *name == DOCS_DIR_NAME,
        [parent, name] => *parent == WEBSITE_DIR_NAME && *name == DOCS_DIR_NAME,
        _ => false,
    }
}

/// Whether a top-level mirror entry must survive pruning.
///
/// The version control directory is always kept. Any other entry is kept only
/// when its name is exactly the first path segment of a discovered
/// documentation root, so `docs-legacy` does not ride along with `docs`.
pub fn is_docs_entry(entry_name: &str, docs_paths: &BTreeSet<PathBuf>) -> bool {
    if entry_name == GIT_DIR_NAME {
        return true;
    }
    docs_paths.iter().any(|docs| {
        docs.components()
            .next()
            .is_some_and(|first| first.as_os_str() == entry_name)
    })
}

/// Render a relative documentation path with `/` separators for links.
pub fn to_link_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
