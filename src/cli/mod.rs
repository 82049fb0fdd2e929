//! CLI Module
//!
//! Command-line interface for layerpaint.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layerpaint - compose named color layers on a pixel grid
#[derive(Parser, Debug)]
#[command(name = "layerpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the standard layer catalog
    #[command(name = "layers")]
    Layers,

    /// Replay a scenario file and print the resulting colors
    #[command(name = "replay")]
    Replay {
        /// Path to the scenario JSON
        scenario: PathBuf,
    },
}
