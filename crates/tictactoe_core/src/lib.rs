//! Tic-tac-toe game core.
//!
//! Pure game state with no rendering of its own:
//!
//! - **Board**: the 9-slot grid and its mark count
//! - **Player** / **Roster**: the two named players and their symbols
//! - **GameController**: the session state machine that alternates turns,
//!   evaluates win/draw, and reports to a [`Presentation`] surface
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, GameController, Presentation, Position, Roster, Symbol};
//!
//! #[derive(Default)]
//! struct Silent;
//!
//! impl Presentation for Silent {
//!     fn render_mark(&mut self, _position: Position, _symbol: Symbol) {}
//!     fn announce(&mut self, _message: &str) {}
//!     fn reset_view(&mut self) {}
//! }
//!
//! let roster = Roster::new("player1", "player2").unwrap();
//! let mut game = GameController::new(Board::new(), roster, Silent);
//! game.start();
//! game.select_slot(4);
//! assert_eq!(game.active_player().symbol(), Symbol::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
mod invariants;
mod player;
mod position;
mod presentation;
mod rules;
mod types;

pub use action::Move;
pub use board::{Board, SlotError};
pub use controller::{GameController, Ignored, Outcome, Phase, Selection, SessionSummary};
pub use invariants::{
    FirstPlayerLeads, HistoryMatchesBoard, Invariant, InvariantSet, InvariantViolation,
    MarkCountConsistent, SessionInvariants, SessionView,
};
pub use player::{Player, Roster, RosterError};
pub use position::Position;
pub use presentation::Presentation;
pub use rules::{WINNING_LINES, has_won, winner, winning_line};
pub use types::{Square, Symbol};
