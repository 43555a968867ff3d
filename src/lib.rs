//! # Provider Docs Library
//!
//! Core functionality behind the `provider-docs` command-line tool: keep a
//! local mirror of the documentation of a set of provider repositories and
//! publish an index page linking to each of them.
//!
//! ## Quick Example
//!
//! ```
//! use provider_docs::config;
//!
//! let config = config::parse(r#"
//! target_dir: terraform-providers
//! providers:
//!   aws:
//!     repo: hashicorp/terraform-provider-aws
//!     description: AWS Provider
//! "#).unwrap();
//!
//! assert_eq!(config.providers.len(), 1);
//! assert!(config.mirror_dir("aws").ends_with("terraform-providers/aws"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the providers file, parsed strictly.
//! - **Docs discovery (`docs`)**: which directories of a mirror count as
//!   documentation and which top-level entries survive pruning.
//! - **Mirrors (`mirror`, `git`)**: shallow single-branch clones, refreshed by
//!   fetch and hard reset, pruned down to their documentation.
//! - **Index (`index`)**: the `index.md` page listing every mirrored provider.
//!
//! ## Execution Flow
//!
//! 1. Load the configuration.
//! 2. Clone or update each requested provider, one at a time.
//! 3. Locate its documentation roots and prune everything else.
//! 4. Regenerate the index from what is on disk.

pub mod config;
pub mod defaults;
pub mod docs;
pub mod error;
pub mod git;
pub mod index;
pub mod mirror;
pub mod output;
pub mod suggestions;

#[cfg(test)]
mod docs_proptest;
