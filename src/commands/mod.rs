//! # CLI Command Implementations
//!
//! One module per subcommand of `provider-docs`. Each module defines the
//! `clap` argument struct(s) for its command and an `execute` function that
//! loads the configuration and calls into the `provider_docs` library.
//!
//! Progress and results go to stdout; failures go to stderr. Commands that
//! change mirrors finish by regenerating the index.

pub mod clean;
pub mod clone;
pub mod completions;
pub mod index;
pub mod list;
pub mod update;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use provider_docs::config::{self, Config};
use provider_docs::defaults::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILENAME};
use provider_docs::error::Error;
use provider_docs::output::{OutputConfig, Status};
use provider_docs::suggestions;

/// Location of the providers configuration, shared by every command that needs it.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the providers configuration file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = CONFIG_ENV_VAR
    )]
    pub path: PathBuf,
}

impl ConfigArgs {
    /// Load and validate the configuration file.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Err(suggestions::config_not_found(&self.path));
        }
        config::from_file(&self.path)
            .with_context(|| format!("Error loading config from {}", self.path.display()))
    }
}

/// Attach the next-step hint to mirror state errors.
pub(crate) fn explain(error: Error, name: &str) -> anyhow::Error {
    match &error {
        Error::NotCloned { .. } => {
            anyhow::anyhow!("{}\n\n{}", error, suggestions::not_cloned_hint(name))
        }
        Error::NotAGitMirror { path, .. } => {
            anyhow::anyhow!(
                "{}\n\n{}",
                error,
                suggestions::not_a_git_mirror_hint(name, path)
            )
        }
        Error::AlreadyCloned { .. } => {
            anyhow::anyhow!("{}\n\n{}", error, suggestions::already_cloned_hint(name))
        }
        _ => anyhow::Error::new(error),
    }
}

/// Regenerate the index after mirrors changed.
///
/// Failures are reported but do not fail the command that triggered them.
pub(crate) fn regenerate_index(config: &Config, out: &OutputConfig) {
    println!("{} Generating index.md...", out.marker(Status::Progress));
    match provider_docs::index::generate_index(config) {
        Ok(outcome) => println!(
            "{} Index written to {} ({} provider(s))",
            out.marker(Status::Success),
            outcome.path.display(),
            outcome.entries.len()
        ),
        Err(e) => eprintln!(
            "{} Error generating index: {}",
            out.marker(Status::Failure),
            e
        ),
    }
}

/// Render discovered docs paths for a progress line.
pub(crate) fn docs_summary<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> String {
    paths
        .into_iter()
        .map(|p| provider_docs::docs::to_link_path(p))
        .collect::<Vec<_>>()
        .join(", ")
}
