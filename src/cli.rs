//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Provider Docs - Mirror provider documentation locally and index it
#[derive(Parser, Debug)]
#[command(name = "provider-docs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a single provider and regenerate the index
    CloneOne(commands::clone::CloneOneArgs),

    /// Clone every configured provider and regenerate the index
    CloneAll(commands::clone::CloneAllArgs),

    /// Update the docs of a single provider and regenerate the index
    UpdateOne(commands::update::UpdateOneArgs),

    /// Update the docs of every configured provider and regenerate the index
    UpdateAll(commands::update::UpdateAllArgs),

    /// List configured providers
    List(commands::list::ListArgs),

    /// Remove all cloned providers
    Clean(commands::clean::CleanArgs),

    /// Generate the index.md file
    Index(commands::index::IndexArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let color = self.color.as_str();

        match self.command {
            Commands::CloneOne(args) => commands::clone::execute_one(args, color),
            Commands::CloneAll(args) => commands::clone::execute_all(args, color),
            Commands::UpdateOne(args) => commands::update::execute_one(args, color),
            Commands::UpdateAll(args) => commands::update::execute_all(args, color),
            Commands::List(args) => commands::list::execute(args),
            Commands::Clean(args) => commands::clean::execute(args, color),
            Commands::Index(args) => commands::index::execute(args, color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr at the requested level.
///
/// `RUST_LOG` still wins when set, so module-level filters keep working.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
