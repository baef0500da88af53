//! Binary crate for the `sunbalance` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and coordinate prompts
//! - Human-friendly report rendering

use clap::Parser;

mod cli;
mod report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
