//! # Clone Command Implementation
//!
//! This module implements `clone-one` and `clone-all`, which create the
//! mirrors of configured providers.
//!
//! - **`clone-one`**: clones a single provider, optionally on an explicit
//!   branch, and fails on the first error.
//! - **`clone-all`**: clones every provider in name order. A failing provider
//!   is reported and the remaining ones are still processed.
//!
//! Both commands regenerate `index.md` at the end.

use anyhow::{Context, Result};
use clap::Args;

use provider_docs::config::Provider;
use provider_docs::mirror::{MirrorManager, MirrorOutcome};
use provider_docs::output::{OutputConfig, Status};
use provider_docs::suggestions;

use super::{docs_summary, explain, regenerate_index, ConfigArgs};

/// Clone a specific provider
#[derive(Args, Debug)]
pub struct CloneOneArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Name of the provider to clone.
    #[arg(short, long, value_name = "NAME")]
    pub provider: String,

    /// Branch to clone instead of the pinned or remote default branch.
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Clone all configured providers
#[derive(Args, Debug)]
pub struct CloneAllArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `clone-one` command.
pub fn execute_one(args: CloneOneArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.load()?;
    let provider = config
        .providers
        .get(&args.provider)
        .ok_or_else(|| suggestions::provider_not_found(&args.provider, config.provider_names()))?;

    let manager = MirrorManager::from_config(&config);
    let outcome = clone(&manager, &args.provider, provider, args.branch.as_deref(), &out)
        .with_context(|| format!("Error cloning {}", args.provider))?;
    report_success(&args.provider, &outcome, &out);

    regenerate_index(&config, &out);
    Ok(())
}

/// Execute the `clone-all` command.
pub fn execute_all(args: CloneAllArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.load()?;
    let manager = MirrorManager::from_config(&config);

    let mut failures = 0usize;
    for (name, provider) in &config.providers {
        match clone(&manager, name, provider, None, &out) {
            Ok(outcome) => report_success(name, &outcome, &out),
            Err(e) => {
                failures += 1;
                eprintln!(
                    "{} Error cloning {}: {:#}",
                    out.marker(Status::Failure),
                    name,
                    e
                );
            }
        }
    }

    if failures == 0 {
        println!("All providers have been processed!");
    } else {
        println!(
            "All providers have been processed ({} of {} failed)",
            failures,
            config.providers.len()
        );
    }

    regenerate_index(&config, &out);
    Ok(())
}

fn clone(
    manager: &MirrorManager,
    name: &str,
    provider: &Provider,
    branch: Option<&str>,
    out: &OutputConfig,
) -> Result<MirrorOutcome> {
    println!(
        "{} Processing {} ({})...",
        out.marker(Status::Progress),
        name,
        provider.repo
    );
    manager
        .clone_provider(name, provider, branch)
        .map_err(|e| explain(e, name))
}

fn report_success(name: &str, outcome: &MirrorOutcome, out: &OutputConfig) {
    println!(
        "{} Successfully cloned {} ({}), docs: {}",
        out.marker(Status::Success),
        name,
        outcome.branch,
        docs_summary(&outcome.docs_paths)
    );
    if !outcome.pruned.is_empty() {
        log::info!("pruned from {}: {}", name, outcome.pruned.join(", "));
    }
}
