//! # Error Handling
//!
//! This module defines the centralized error type for the `provider-docs`
//! library. It uses `thiserror` to describe every failure the tool can hit,
//! grouped the same way the commands report them:
//!
//! - Configuration errors (missing, empty, malformed or unknown fields).
//! - Provider lookup errors (name not in the configuration).
//! - Mirror state errors (update before clone, a mirror without its own
//!   repository, clone over an existing mirror).
//! - Git failures, carrying the command and the stderr of the `git` binary.
//! - Discovery failures while walking a mirror.
//! - Index output errors (no providers, missing target directory, write failure).
//!
//! The `Result` alias is used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for provider-docs operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be parsed or failed validation.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A provider name was requested that the configuration does not declare.
    #[error("Provider '{name}' not found in configuration")]
    ProviderNotFound { name: String },

    /// An update was requested for a provider whose mirror does not exist.
    #[error("Provider '{name}' has not been cloned yet (expected {})", path.display())]
    NotCloned { name: String, path: PathBuf },

    /// A mirror directory exists but holds no repository of its own.
    #[error("Provider '{name}' mirror at {} is not a git repository", path.display())]
    NotAGitMirror { name: String, path: PathBuf },

    /// A clone was requested over an existing mirror.
    #[error("Provider '{name}' is already cloned at {}", path.display())]
    AlreadyCloned { name: String, path: PathBuf },

    /// Cloning a repository failed.
    #[error("Git clone error for {url}@{r#ref}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        r#ref: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// Any other git invocation failed.
    #[error("Git command failed for {target}: {command} - {stderr}")]
    GitCommand {
        command: String,
        target: String,
        stderr: String,
    },

    /// A mirror holds no documentation directory at a qualifying location.
    #[error("No docs directories found in repository for '{name}' at {}", path.display())]
    NoDocs { name: String, path: PathBuf },

    /// Walking a mirror failed.
    #[error("Error finding docs directories under {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Index generation was requested with an empty provider set.
    #[error("No providers configured")]
    NoProviders,

    /// The target directory that should receive the index does not exist.
    #[error("Target directory does not exist: {}", path.display())]
    TargetDirMissing { path: PathBuf },

    /// Writing the index page failed.
    #[error("Error writing index file {}: {source}", path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
