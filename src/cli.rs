//! Command-line interface for tictactoe.

use crate::config::{ConfigError, GameConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Player name sources shared by every subcommand
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerArgs {
    /// Path to a TOML file with `player_one` / `player_two`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of player one (plays X, moves first)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of player two (plays O)
    #[arg(long)]
    pub player_two: Option<String>,
}

impl PlayerArgs {
    /// Loads the config file, then applies name overrides.
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig::load(self.config.as_deref())?
            .with_overrides(self.player_one.clone(), self.player_two.clone());
        config.validate()?;
        Ok(config)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Player names
        #[command(flatten)]
        players: PlayerArgs,

        /// File that receives log output while the UI owns the screen
        #[arg(long, default_value = "tictactoe_tui.log")]
        log_file: PathBuf,
    },

    /// Play a fixed sequence of slot selections (0-8) and print what happens
    Play {
        /// Comma-separated slot indices, e.g. `0,3,1,4,2`
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,

        /// Player names
        #[command(flatten)]
        players: PlayerArgs,
    },
}
