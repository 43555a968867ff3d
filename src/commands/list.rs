//! # List Command Implementation
//!
//! Prints the configured providers with their repository and whether a
//! mirror exists on disk. `--json` emits the same information as a JSON
//! array for scripts.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use provider_docs::config::Config;
use provider_docs::mirror::MirrorManager;

use super::ConfigArgs;

/// List all available providers
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// One provider as shown by `list`.
#[derive(Debug, Serialize)]
struct ProviderListing<'a> {
    name: &'a str,
    repo: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
    cloned: bool,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs) -> Result<()> {
    let config = args.config.load()?;
    let listings = listings(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("No providers configured.");
        return Ok(());
    }

    println!("Available providers:");
    for listing in &listings {
        let marker = if listing.cloned { " [cloned]" } else { "" };
        println!("  - {} ({}){}", listing.name, listing.repo, marker);
    }

    Ok(())
}

fn listings(config: &Config) -> Vec<ProviderListing<'_>> {
    let manager = MirrorManager::from_config(config);
    config
        .providers
        .iter()
        .map(|(name, provider)| ProviderListing {
            name,
            repo: &provider.repo,
            description: &provider.description,
            branch: provider.branch.as_deref(),
            cloned: manager.is_cloned(name),
        })
        .collect()
}
