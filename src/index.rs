//! # Index Generation
//!
//! Renders `index.md` at the root of the target directory, with one line per
//! provider whose mirror holds documentation:
//!
//! ```text
//! - [aws](aws/docs): AWS Provider
//! ```
//!
//! Providers without a mirror, or whose mirror has no documentation root,
//! are left out with a warning. When a mirror has several roots the first in
//! path order wins, so a root `docs` is preferred over `website/docs`.
//!
//! Generation fails outright only when no provider is configured or the
//! target directory does not exist. A configuration whose providers are not
//! cloned yet still produces an index, with an empty listing.

use crate::config::Config;
use crate::defaults::INDEX_FILENAME;
use crate::docs::{find_docs_directories, to_link_path};
use crate::error::{Error, Result};
use std::fmt::Write as _;
use std::path::PathBuf;

const INDEX_HEADER: &str = "# Terraform Provider Documentation

This directory contains documentation for various Terraform providers. Each provider's documentation is maintained in its own subdirectory.

## Available Providers

";

/// One line of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Provider name, used as the link text.
    pub name: String,
    /// Link relative to the index, e.g. `aws/docs`.
    pub link: String,
    /// Configured description.
    pub description: String,
}

/// Why a provider was left out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The provider has no mirror on disk.
    NotCloned,
    /// The mirror holds no documentation root.
    NoDocs,
    /// Walking the mirror failed.
    Discovery(String),
}

/// Result of writing the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    /// Path of the written file.
    pub path: PathBuf,
    /// Lines written, in provider order.
    pub entries: Vec<IndexEntry>,
    /// Providers left out, with the reason.
    pub skipped: Vec<(String, SkipReason)>,
}

/// Render the page for the given entries.
pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut content = String::from(INDEX_HEADER);
    for entry in entries {
        let _ = writeln!(
            content,
            "- [{}]({}): {}",
            entry.name, entry.link, entry.description
        );
    }
    content
}

/// Collect index entries from the mirrors currently on disk.
pub fn collect_entries(config: &Config) -> (Vec<IndexEntry>, Vec<(String, SkipReason)>) {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (name, provider) in &config.providers {
        let mirror_dir = config.mirror_dir(name);
        if !mirror_dir.is_dir() {
            log::warn!("skipping {}: not cloned yet", name);
            skipped.push((name.clone(), SkipReason::NotCloned));
            continue;
        }

        let docs_paths = match find_docs_directories(&mirror_dir) {
            Ok(paths) => paths,
            Err(e) => {
                log::warn!("skipping {}: {}", name, e);
                skipped.push((name.clone(), SkipReason::Discovery(e.to_string())));
                continue;
            }
        };

        let Some(first) = docs_paths.iter().next() else {
            log::warn!("skipping {}: no docs directory found", name);
            skipped.push((name.clone(), SkipReason::NoDocs));
            continue;
        };

        entries.push(IndexEntry {
            name: name.clone(),
            link: format!("{}/{}", name, to_link_path(first)),
            description: provider.description.clone(),
        });
    }

    (entries, skipped)
}

/// Write `index.md` into the target directory of `config`.
pub fn generate_index(config: &Config) -> Result<IndexOutcome> {
    if config.providers.is_empty() {
        return Err(Error::NoProviders);
    }
    if !config.target_dir.is_dir() {
        return Err(Error::TargetDirMissing {
            path: config.target_dir.clone(),
        });
    }

    let (entries, skipped) = collect_entries(config);
    let path = config.target_dir.join(INDEX_FILENAME);
    std::fs::write(&path, render_index(&entries)).map_err(|source| Error::IndexWrite {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} with {} provider(s)", path.display(), entries.len());

    Ok(IndexOutcome {
        path,
        entries,
        skipped,
    })
}
