//! # Provider Docs CLI
//!
//! This is the binary entry point for the `provider-docs` command-line tool.
//!
//! It parses the command line with `clap`, runs the selected command and
//! turns errors into a non-zero exit. The mirroring and indexing logic lives
//! in the `provider_docs` library crate; the binary only wires it to the
//! command line.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
