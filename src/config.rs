//! # Configuration Schema and Parsing
//!
//! This module defines the structure of the providers configuration file and
//! the logic for loading it.
//!
//! ```yaml
//! target_dir: terraform-providers
//! providers:
//!   aws:
//!     repo: hashicorp/terraform-provider-aws
//!     description: AWS Provider
//!     branch: main        # optional
//! ```
//!
//! ## Validation
//!
//! Parsing is strict: unknown fields, at the top level or inside a provider,
//! are rejected. An empty file is rejected, as is a file that declares neither
//! a target directory nor any provider. Every provider needs a non-empty
//! `repo` and `description`, and its name must be usable as a directory name.
//!
//! The loaded [`Config`] is passed explicitly to every operation; nothing in
//! the library reads it from global state.

use crate::defaults::DEFAULT_TARGET_DIR;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A repository whose documentation is mirrored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Provider {
    /// Repository identifier: a URL, a local path, or an `owner/name` GitHub shorthand.
    #[serde(default)]
    pub repo: String,
    /// Human-readable description shown in the index.
    #[serde(default)]
    pub description: String,
    /// Branch to mirror. When unset, the remote's default branch is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl Provider {
    /// Create a provider without a pinned branch.
    pub fn new(repo: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            description: description.into(),
            branch: None,
        }
    }

    /// Pin the provider to a branch.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// The loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one mirror per provider and the generated index.
    pub target_dir: PathBuf,
    /// Providers keyed by name. Iteration follows name order.
    pub providers: BTreeMap<String, Provider>,
}

/// On-disk shape of the file, before defaults and validation are applied.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    target_dir: Option<String>,
    #[serde(default)]
    providers: Option<BTreeMap<String, Provider>>,
}

impl Config {
    /// Create a configuration from its parts.
    pub fn new(target_dir: impl Into<PathBuf>, providers: BTreeMap<String, Provider>) -> Self {
        Self {
            target_dir: target_dir.into(),
            providers,
        }
    }

    /// Look up a provider by name.
    pub fn provider(&self, name: &str) -> Result<&Provider> {
        self.providers.get(name).ok_or_else(|| Error::ProviderNotFound {
            name: name.to_string(),
        })
    }

    /// Names of all configured providers, in processing order.
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Path of the mirror for `name` under the target directory.
    pub fn mirror_dir(&self, name: &str) -> PathBuf {
        self.target_dir.join(name)
    }
}

/// Parse a configuration from YAML text.
pub fn parse(yaml_content: &str) -> Result<Config> {
    if yaml_content.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: "error parsing config file: file is empty".to_string(),
            hint: Some("Declare 'target_dir' and a 'providers' mapping".to_string()),
        });
    }

    let raw: RawConfig = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = format!("error parsing config file: {}", e);
        let hint = message
            .contains("unknown field")
            .then(|| "Allowed fields are 'target_dir' and 'providers'; each provider accepts 'repo', 'description' and 'branch'".to_string());
        Error::ConfigParse { message, hint }
    })?;

    let target_dir = raw.target_dir.filter(|dir| !dir.trim().is_empty());
    let providers = raw.providers.unwrap_or_default();

    if providers.is_empty() && target_dir.is_none() {
        return Err(Error::ConfigParse {
            message: "invalid configuration: no valid fields found".to_string(),
            hint: Some("Declare 'target_dir' and a 'providers' mapping".to_string()),
        });
    }

    for (name, provider) in &providers {
        validate_provider(name, provider)?;
    }

    Ok(Config {
        target_dir: PathBuf::from(target_dir.unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string())),
        providers,
    })
}

/// Load a configuration from a YAML file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::ConfigParse {
        message: format!(
            "error reading config file {}: {}",
            path.as_ref().display(),
            e
        ),
        hint: None,
    })?;
    parse(&content)
}

fn validate_provider(name: &str, provider: &Provider) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(Error::ConfigParse {
            message: format!("invalid provider name '{}'", name),
            hint: Some("Provider names become directory names; use a single path segment".to_string()),
        });
    }
    if provider.repo.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: format!("provider '{}' is missing a 'repo' field", name),
            hint: Some("Add 'repo: owner/name', a URL, or a local path".to_string()),
        });
    }
    if provider.description.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: format!("provider '{}' is missing a 'description' field", name),
            hint: None,
        });
    }
    if provider.branch.as_deref().is_some_and(|b| b.trim().is_empty()) {
        return Err(Error::ConfigParse {
            message: format!("provider '{}' has an empty 'branch' field", name),
            hint: Some("Remove 'branch' to follow the remote's default branch".to_string()),
        });
    }
    Ok(())
}
