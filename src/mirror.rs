//! # Provider Mirror Management
//!
//! This module provides the `MirrorManager`, which keeps one mirror per
//! provider under the target directory and reduces each mirror to its
//! documentation.
//!
//! ## Strategy
//!
//! A mirror is a shallow, single-branch clone. The branch is chosen in this
//! order: an explicit override, the provider's pinned `branch`, the remote's
//! default branch, and finally [`DEFAULT_BRANCH`]. After every clone or update
//! the docs locator runs and each top-level entry that is neither `.git` nor
//! the first segment of a documentation root is deleted.
//!
//! Updating fetches the tracked branch with a forced ref update and checks it
//! out at the fetched commit, discarding local changes. This restores files
//! pruned last time before they are pruned again, and leaves `HEAD` on the
//! branch that was fetched so later updates keep following it.
//!
//! A mirror directory without its own `.git` is refused before git runs, so
//! git never falls back to a repository enclosing the target directory.
//!
//! ## Design
//!
//! Git access goes through the [`GitOperations`] trait. The default
//! implementation drives the system `git` binary; tests swap in a mock so the
//! mirror policy can be checked without a repository.

use crate::config::{Config, Provider};
use crate::defaults::{github_url, DEFAULT_BRANCH, GIT_DIR_NAME};
use crate::docs::{find_docs_directories, is_docs_entry};
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Branch the remote's `HEAD` points to, if it advertises one.
    fn default_branch(&self, url: &str) -> Result<Option<String>>;

    /// Shallow, single-branch clone of `url` into `target_dir`.
    fn clone_shallow(&self, url: &str, branch: &str, target_dir: &Path) -> Result<()>;

    /// Branch currently checked out in `repo_dir`.
    fn current_branch(&self, repo_dir: &Path) -> Result<String>;

    /// Fetch `branch` from `origin`, force-updating its remote-tracking ref.
    fn fetch_branch(&self, repo_dir: &Path, branch: &str) -> Result<()>;

    /// Check out `branch` at its remote-tracking ref, discarding local changes.
    fn checkout_remote(&self, repo_dir: &Path, branch: &str) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn default_branch(&self, url: &str) -> Result<Option<String>> {
        crate::git::default_branch(url)
    }

    fn clone_shallow(&self, url: &str, branch: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone_shallow(url, branch, target_dir)
    }

    fn current_branch(&self, repo_dir: &Path) -> Result<String> {
        crate::git::current_branch(repo_dir)
    }

    fn fetch_branch(&self, repo_dir: &Path, branch: &str) -> Result<()> {
        crate::git::fetch_branch(repo_dir, branch)
    }

    fn checkout_remote(&self, repo_dir: &Path, branch: &str) -> Result<()> {
        crate::git::checkout_remote(repo_dir, branch)
    }
}

/// Result of a successful clone or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutcome {
    /// Branch that was cloned or fetched.
    pub branch: String,
    /// Documentation roots found in the mirror, relative to it.
    pub docs_paths: BTreeSet<PathBuf>,
    /// Top-level entries deleted by pruning, sorted by name.
    pub pruned: Vec<String>,
}

/// Result of removing the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The directory existed and was removed.
    Removed(PathBuf),
    /// There was no directory to remove.
    NothingToClean(PathBuf),
}

/// Work out where to clone a provider from.
///
/// Absolute paths, paths starting with `.`, URLs with a scheme and scp-like
/// `user@host:path` addresses are used as they are. Anything else is an
/// `owner/name` shorthand for a GitHub repository.
pub fn resolve_repo_url(repo: &str) -> String {
    if Path::new(repo).is_absolute() || repo.starts_with('.') {
        return repo.to_string();
    }
    if url::Url::parse(repo).is_ok() || is_scp_like(repo) {
        return repo.to_string();
    }
    github_url(repo)
}

fn is_scp_like(repo: &str) -> bool {
    repo.split_once(':')
        .is_some_and(|(host, _)| host.contains('@') && !host.contains('/'))
}

/// Delete every top-level entry of `mirror_dir` that does not belong to a
/// documentation root. Returns the removed names, sorted.
pub fn prune_mirror(mirror_dir: &Path, docs_paths: &BTreeSet<PathBuf>) -> Result<Vec<String>> {
    let mut pruned = Vec::new();

    for entry in fs::read_dir(mirror_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if is_docs_entry(&name, docs_paths) {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        log::debug!("pruned {}", path.display());
        pruned.push(name);
    }

    pruned.sort();
    Ok(pruned)
}

/// The main entry point for managing provider mirrors.
pub struct MirrorManager {
    target_dir: PathBuf,
    git_ops: Box<dyn GitOperations>,
}

impl MirrorManager {
    /// Creates a `MirrorManager` that uses the system `git` and keeps mirrors
    /// under `target_dir`.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            git_ops: Box::new(DefaultGitOperations),
        }
    }

    /// Creates a `MirrorManager` for the target directory of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.target_dir.clone())
    }

    /// Creates a `MirrorManager` with a custom `GitOperations` implementation.
    ///
    /// This is primarily used for testing to inject mock operations.
    pub fn with_operations(target_dir: impl Into<PathBuf>, git_ops: Box<dyn GitOperations>) -> Self {
        Self {
            target_dir: target_dir.into(),
            git_ops,
        }
    }

    /// Directory holding all mirrors.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Directory of the mirror for `name`.
    pub fn mirror_dir(&self, name: &str) -> PathBuf {
        self.target_dir.join(name)
    }

    /// Whether a mirror for `name` exists on disk.
    pub fn is_cloned(&self, name: &str) -> bool {
        self.mirror_dir(name).is_dir()
    }

    /// Clone a provider and reduce the clone to its documentation.
    ///
    /// A clone without any documentation root is reported as
    /// [`Error::NoDocs`]; the cloned files are left on disk.
    pub fn clone_provider(
        &self,
        name: &str,
        provider: &Provider,
        branch_override: Option<&str>,
    ) -> Result<MirrorOutcome> {
        let mirror_dir = self.mirror_dir(name);
        if mirror_dir.exists() {
            return Err(Error::AlreadyCloned {
                name: name.to_string(),
                path: mirror_dir,
            });
        }

        let url = resolve_repo_url(&provider.repo);
        let branch = match branch_override.or(provider.branch.as_deref()) {
            Some(branch) => branch.to_string(),
            None => self.probe_default_branch(&url),
        };

        log::info!("cloning {} from {} ({})", name, url, branch);
        self.git_ops.clone_shallow(&url, &branch, &mirror_dir)?;

        let docs_paths = find_docs_directories(&mirror_dir)?;
        if docs_paths.is_empty() {
            return Err(Error::NoDocs {
                name: name.to_string(),
                path: mirror_dir,
            });
        }

        let pruned = prune_mirror(&mirror_dir, &docs_paths)?;
        Ok(MirrorOutcome {
            branch,
            docs_paths,
            pruned,
        })
    }

    /// Bring an existing mirror up to date with its remote branch.
    ///
    /// `provider` supplies a pinned branch when the provider is still
    /// configured. Without an override or pin, the branch checked out in the
    /// mirror is followed; an override becomes the checked-out branch.
    ///
    /// A mirror directory without `.git` is reported as
    /// [`Error::NotAGitMirror`] and left untouched.
    pub fn update_provider(
        &self,
        name: &str,
        provider: Option<&Provider>,
        branch_override: Option<&str>,
    ) -> Result<MirrorOutcome> {
        let mirror_dir = self.mirror_dir(name);
        if !mirror_dir.is_dir() {
            return Err(Error::NotCloned {
                name: name.to_string(),
                path: mirror_dir,
            });
        }
        if !mirror_dir.join(GIT_DIR_NAME).exists() {
            return Err(Error::NotAGitMirror {
                name: name.to_string(),
                path: mirror_dir,
            });
        }

        let pinned = branch_override.or_else(|| provider.and_then(|p| p.branch.as_deref()));
        let branch = match pinned {
            Some(branch) => branch.to_string(),
            None => self.tracked_branch(&mirror_dir),
        };

        log::info!("updating {} ({})", name, branch);
        self.git_ops.fetch_branch(&mirror_dir, &branch)?;
        self.git_ops.checkout_remote(&mirror_dir, &branch)?;

        let docs_paths = find_docs_directories(&mirror_dir)?;
        if docs_paths.is_empty() {
            return Err(Error::NoDocs {
                name: name.to_string(),
                path: mirror_dir,
            });
        }

        let pruned = prune_mirror(&mirror_dir, &docs_paths)?;
        Ok(MirrorOutcome {
            branch,
            docs_paths,
            pruned,
        })
    }

    /// Remove the target directory and every mirror in it.
    pub fn clean(&self) -> Result<CleanOutcome> {
        if !self.target_dir.exists() {
            return Ok(CleanOutcome::NothingToClean(self.target_dir.clone()));
        }
        fs::remove_dir_all(&self.target_dir)?;
        Ok(CleanOutcome::Removed(self.target_dir.clone()))
    }

    fn probe_default_branch(&self, url: &str) -> String {
        match self.git_ops.default_branch(url) {
            Ok(Some(branch)) => branch,
            Ok(None) => {
                log::debug!("{} does not advertise a default branch, using {}", url, DEFAULT_BRANCH);
                DEFAULT_BRANCH.to_string()
            }
            Err(e) => {
                log::debug!("could not probe default branch of {}: {}", url, e);
                DEFAULT_BRANCH.to_string()
            }
        }
    }

    fn tracked_branch(&self, mirror_dir: &Path) -> String {
        match self.git_ops.current_branch(mirror_dir) {
            Ok(branch) if !branch.is_empty() => branch,
            Ok(_) => DEFAULT_BRANCH.to_string(),
            Err(e) => {
                log::debug!(
                    "could not read branch of {}: {}",
                    mirror_dir.display(),
                    e
                );
                DEFAULT_BRANCH.to_string()
            }
        }
    }
}
