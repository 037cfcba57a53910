//! tictactoe - unified CLI
//!
//! Interactive terminal play or scripted selections.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Command, run_script, run_tui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { players, log_file } => {
            let config = players.resolve()?;
            run_tui(&config, &log_file)
        }
        Command::Play {
            moves,
            json,
            players,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::io::stderr)
                .init();

            let config = players.resolve()?;
            run_script(&config, &moves, json, std::io::stdout().lock())
                .context("Scripted game failed")?;
            Ok(())
        }
    }
}
