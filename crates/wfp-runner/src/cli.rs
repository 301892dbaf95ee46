use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wfp-runner")]
#[command(about = "workflow reference preprocessor CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    Flatten(FlattenCommand),
}

#[derive(Debug, Clone, clap::Args)]
pub struct FlattenCommand {
    #[arg(long)]
    pub file: PathBuf,
    #[arg(long)]
    pub pointer: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
