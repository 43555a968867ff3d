//! # Clean Command Implementation
//!
//! Removes the target directory with every mirror and the index in it. A
//! target directory that does not exist is not an error.

use anyhow::{Context, Result};
use clap::Args;

use provider_docs::mirror::{CleanOutcome, MirrorManager};
use provider_docs::output::{OutputConfig, Status};

use super::ConfigArgs;

/// Remove all cloned providers
#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `clean` command.
pub fn execute(args: CleanArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.load()?;
    let manager = MirrorManager::from_config(&config);

    if manager.target_dir().exists() {
        println!(
            "{} Removing all cloned providers...",
            out.marker(Status::Progress)
        );
    }

    let outcome = manager
        .clean()
        .with_context(|| format!("Error removing {}", manager.target_dir().display()))?;

    match outcome {
        CleanOutcome::Removed(path) => println!(
            "{} Cleanup complete ({} removed)",
            out.marker(Status::Success),
            path.display()
        ),
        CleanOutcome::NothingToClean(path) => {
            println!("No providers directory found at {}", path.display())
        }
    }

    Ok(())
}
