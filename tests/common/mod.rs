//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for the two things most tests need: a
//! workspace directory holding a `providers.yaml`, and local upstream git
//! repositories that providers can be cloned from without network access.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     skip_without_git!();
//!     let upstream = UpstreamRepo::with_docs();
//!     let fixture = TestFixture::new().with_providers(&[("aws", &upstream)]);
//!     fixture.command().arg("clone-all").assert().success();
//! }
//! ```

#![allow(dead_code)]

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{configs, git_available, TestFixture, UpstreamRepo};
    #[allow(unused_imports)]
    pub use crate::skip_without_git;
}

/// Common configuration YAML snippets for testing.
pub mod configs {
    /// Two GitHub providers, never cloned by the tests.
    pub const TWO_PROVIDERS: &str = r#"
target_dir: mirrors
providers:
  aws:
    repo: hashicorp/terraform-provider-aws
    description: AWS Provider
  azurerm:
    repo: hashicorp/terraform-provider-azurerm
    description: Azure Provider
"#;

    /// A configuration with an undeclared top-level field.
    pub const UNKNOWN_FIELD: &str = r#"
target_dir: mirrors
providers:
  aws:
    repo: hashicorp/terraform-provider-aws
    description: AWS Provider
invalid_field: true
"#;

    /// A target directory without any provider.
    pub const NO_PROVIDERS: &str = "target_dir: mirrors\n";
}

/// Whether a usable `git` binary is on PATH.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Return early from a test when `git` is not installed.
#[macro_export]
macro_rules! skip_without_git {
    () => {
        if !$crate::common::git_available() {
            eprintln!("Skipping test: git is not available");
            return;
        }
    };
}

/// A local repository standing in for a provider's upstream.
pub struct UpstreamRepo {
    temp_dir: assert_fs::TempDir,
}

impl UpstreamRepo {
    /// Create an empty repository whose `HEAD` points at `branch`.
    pub fn on_branch(branch: &str) -> Self {
        let repo = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", &format!("refs/heads/{}", branch)]);
        repo
    }

    /// Create a repository on `main` with a README, root docs and source code.
    pub fn with_docs() -> Self {
        let repo = Self::on_branch("main");
        repo.write("README.md", "# Test Repo")
            .write("docs/index.md", "# Docs")
            .write("main.go", "package main")
            .commit("Initial commit");
        repo
    }

    /// Create a working copy of `source` with `source` as its `origin`.
    pub fn clone_of(source: &UpstreamRepo) -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let output = Command::new("git")
            .args(["clone", "-q"])
            .arg(source.path())
            .arg(temp_dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git clone failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Self { temp_dir }
    }

    /// Create `branch` from the current commit and switch to it.
    pub fn new_branch(&self, branch: &str) -> &Self {
        self.git(&["checkout", "-q", "-b", branch]);
        self
    }

    /// Switch to an existing branch.
    pub fn switch_to(&self, branch: &str) -> &Self {
        self.git(&["checkout", "-q", branch]);
        self
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, path: &str, content: &str) -> &Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write upstream file");
        self
    }

    /// Delete a file or directory relative to the repository root.
    pub fn remove(&self, path: &str) -> &Self {
        let full = self.temp_dir.path().join(path);
        if full.is_dir() {
            std::fs::remove_dir_all(full).expect("Failed to remove upstream directory");
        } else {
            std::fs::remove_file(full).expect("Failed to remove upstream file");
        }
        self
    }

    /// Stage everything and commit.
    pub fn commit(&self, message: &str) -> &Self {
        self.git(&["add", "-A"]);
        self.git(&[
            "-c",
            "user.name=Test User",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "-m",
            message,
        ]);
        self
    }

    /// Absolute path of the repository.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The path as it goes into a `repo:` field.
    pub fn repo_field(&self) -> String {
        self.path().to_string_lossy().to_string()
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// A test fixture that provides a temporary directory with optional config.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `providers.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("providers.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Write a configuration that mirrors each upstream into `mirrors/`.
    pub fn with_providers(self, providers: &[(&str, &UpstreamRepo)]) -> Self {
        let mut yaml = format!(
            "target_dir: {}\nproviders:\n",
            self.target_dir().to_string_lossy()
        );
        for (name, upstream) in providers {
            yaml.push_str(&format!(
                "  {name}:\n    repo: {repo}\n    description: {name} docs\n",
                name = name,
                repo = upstream.repo_field()
            ));
        }
        self.with_config(&yaml)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("providers.yaml")
    }

    /// Directory the generated configurations mirror into.
    pub fn target_dir(&self) -> PathBuf {
        self.temp_dir.path().join("mirrors")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory with colors off.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("provider-docs");
        cmd.current_dir(self.path())
            .env_remove("PROVIDER_DOCS_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
