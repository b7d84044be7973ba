//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::diff::DiffArgs;
use super::commands::run::RunArgs;

#[derive(Parser, Debug)]
#[command(name = "dialectic")]
#[command(about = "Dialectic - two-agent draft/critique refinement engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .dialectic/config.yaml plus DIALECTIC_* overrides)
    #[arg(short, long, global = true, env = "DIALECTIC_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the draft/critique loop on a request
    Run(RunArgs),

    /// Word-level alignment between two texts
    Diff(DiffArgs),

    /// Print the sample request
    Example,
}
