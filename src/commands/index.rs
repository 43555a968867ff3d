//! # Index Command Implementation
//!
//! Regenerates `index.md` from the mirrors currently on disk without touching
//! any repository.

use anyhow::{Context, Result};
use clap::Args;

use provider_docs::index::{generate_index, SkipReason};
use provider_docs::output::{OutputConfig, Status};

use super::ConfigArgs;

/// Generate the index.md file
#[derive(Args, Debug)]
pub struct IndexArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `index` command.
pub fn execute(args: IndexArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.load()?;

    println!("{} Generating index.md...", out.marker(Status::Progress));
    let outcome = generate_index(&config).context("Error generating index")?;

    for (name, reason) in &outcome.skipped {
        let why = match reason {
            SkipReason::NotCloned => "not cloned yet".to_string(),
            SkipReason::NoDocs => "no docs directory".to_string(),
            SkipReason::Discovery(message) => message.clone(),
        };
        println!("{} Skipped {}: {}", out.marker(Status::Warning), name, why);
    }

    println!(
        "{} Index written to {} ({} provider(s))",
        out.marker(Status::Success),
        outcome.path.display(),
        outcome.entries.len()
    );
    Ok(())
}
