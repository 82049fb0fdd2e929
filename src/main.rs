//! Layerpaint CLI
//!
//! Command-line driver for listing layers and replaying scripted sessions.

use clap::Parser;
use env_logger::Env;
use log::info;

use layerpaint::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Layers => layerpaint::cli::commands::list_layers(),
        Commands::Replay { scenario } => layerpaint::cli::commands::replay(&scenario)?,
    }

    Ok(())
}
