//! # Update Command Implementation
//!
//! This module implements `update-one` and `update-all`, which refresh
//! existing mirrors: fetch the tracked branch, force-check it out at the
//! fetched commit, and prune everything that is not documentation again.
//!
//! A provider that was never cloned is an error for `update-one` and a
//! reported failure for `update-all`, which carries on with the others.

use anyhow::{Context, Result};
use clap::Args;

use provider_docs::config::Provider;
use provider_docs::mirror::{MirrorManager, MirrorOutcome};
use provider_docs::output::{OutputConfig, Status};
use provider_docs::suggestions;

use super::{docs_summary, explain, regenerate_index, ConfigArgs};

/// Update docs for a specific provider
#[derive(Args, Debug)]
pub struct UpdateOneArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Name of the provider to update.
    #[arg(short, long, value_name = "NAME")]
    pub provider: String,

    /// Branch to fetch instead of the pinned or checked-out branch.
    /// Without a pin, later updates keep following it.
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// Update docs for all configured providers
#[derive(Args, Debug)]
pub struct UpdateAllArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `update-one` command.
pub fn execute_one(args: UpdateOneArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.load()?;
    let provider = config
        .providers
        .get(&args.provider)
        .ok_or_else(|| suggestions::provider_not_found(&args.provider, config.provider_names()))?;

    let manager = MirrorManager::from_config(&config);
    let outcome = update(&manager, &args.provider, provider, args.branch.as_deref(), &out)
        .with_context(|| format!("Error updating {}", args.provider))?;
    report_success(&args.provider, &outcome, &out);

    regenerate_index(&config, &out);
    Ok(())
}

/// Execute the `update-all` command.
pub fn execute_all(args: UpdateAllArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.load()?;
    let manager = MirrorManager::from_config(&config);

    let mut failures = 0usize;
    for (name, provider) in &config.providers {
        match update(&manager, name, provider, None, &out) {
            Ok(outcome) => report_success(name, &outcome, &out),
            Err(e) => {
                failures += 1;
                eprintln!(
                    "{} Error updating {}: {:#}",
                    out.marker(Status::Failure),
                    name,
                    e
                );
            }
        }
    }

    if failures == 0 {
        println!("All provider docs have been updated!");
    } else {
        println!(
            "All provider docs have been processed ({} of {} failed)",
            failures,
            config.providers.len()
        );
    }

    regenerate_index(&config, &out);
    Ok(())
}

fn update(
    manager: &MirrorManager,
    name: &str,
    provider: &Provider,
    branch: Option<&str>,
    out: &OutputConfig,
) -> Result<MirrorOutcome> {
    println!(
        "{} Updating docs for {}...",
        out.marker(Status::Progress),
        name
    );
    manager
        .update_provider(name, Some(provider), branch)
        .map_err(|e| explain(e, name))
}

fn report_success(name: &str, outcome: &MirrorOutcome, out: &OutputConfig) {
    println!(
        "{} Successfully updated docs for {} ({}), docs: {}",
        out.marker(Status::Success),
        name,
        outcome.branch,
        docs_summary(&outcome.docs_paths)
    );
    if !outcome.pruned.is_empty() {
        log::info!("pruned from {}: {}", name, outcome.pruned.join(", "));
    }
}
