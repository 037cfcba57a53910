//! Two-player tic-tac-toe.
//!
//! The game core lives in [`tictactoe_core`]; this crate wires it to
//! presentation surfaces and the ambient pieces around them.
//!
//! # Architecture
//!
//! - **Config**: player names from TOML and CLI flags
//! - **Tui**: interactive terminal surface (ratatui + crossterm)
//! - **Script**: runs a fixed list of selections and writes each
//!   notification as a line
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameConfig, run_script};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut out = Vec::new();
//! let summary = run_script(&GameConfig::default(), &[0, 3, 1, 4, 2], false, &mut out)?;
//! assert!(summary.phase.to_string().contains("player1 is the Winner"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, PlayerArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Presentation surfaces
pub use script::{ScriptedView, run_script};
pub use tui::{App, TerminalView, run_tui};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Board, GameController, Ignored, Move, Outcome, Phase, Player, Position, Presentation,
    Roster, RosterError, Selection, SessionSummary, SlotError, Square, Symbol,
};
