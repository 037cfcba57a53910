//! Session state machine: turns, win/draw evaluation, and reporting.
//!
//! ```text
//! NotStarted --start--> InProgress --win/draw--> Finished(outcome)
//!                           ^                          |
//!                           +------start/restart-------+
//! ```
//!
//! Every selection is processed to completion before the next one; the
//! active player is only changed inside [`GameController::select_slot`].

use super::action::Move;
use super::board::{Board, SlotError};
use super::invariants::{SessionView, assert_invariants};
use super::player::{Player, Roster};
use super::presentation::Presentation;
use super::rules::winning_line;
use super::types::Symbol;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{_0} is the Winner")]
    Winner(Player),
    /// The board filled with no line completed.
    #[display("It's A Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Phase {
    /// No session has been started yet.
    #[display("Not started")]
    NotStarted,
    /// Moves are being accepted.
    #[display("In progress")]
    InProgress,
    /// A winner or draw was reported; only start/restart leaves this phase.
    #[display("Finished: {_0}")]
    Finished(Outcome),
}

/// Why a selection made no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Ignored {
    /// Selection arrived before the first start.
    #[display("No game in progress")]
    NotStarted,
    /// Selection arrived after a win or draw.
    #[display("Game is already over")]
    GameOver,
    /// The slot was out of range or already marked.
    #[display("{_0}")]
    Slot(SlotError),
}

/// What a selection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing changed.
    Ignored(Ignored),
    /// Mark placed; the game continues with `next` to move.
    Placed {
        /// The accepted move.
        placed: Move,
        /// Symbol of the player now to move.
        next: Symbol,
    },
    /// Mark placed and the game ended.
    Finished {
        /// The accepted move.
        placed: Move,
        /// How the game ended.
        outcome: Outcome,
    },
}

impl Selection {
    /// Returns true if the selection was ignored.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Selection::Ignored(_))
    }
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Lifecycle phase, including the outcome once finished.
    pub phase: Phase,
    /// Symbol of the player to move (or who made the final move).
    pub active: Symbol,
    /// Board contents.
    pub board: Board,
    /// Accepted moves in order.
    pub history: Vec<Move>,
}

/// Orchestrates one game session at a time.
///
/// The board and the presentation surface are injected, so any number of
/// independent controllers can coexist.
#[derive(Debug)]
pub struct GameController<P> {
    board: Board,
    roster: Roster,
    presentation: P,
    phase: Phase,
    active: Symbol,
    history: Vec<Move>,
}

impl<P: Presentation> GameController<P> {
    /// Creates a controller in [`Phase::NotStarted`].
    #[instrument(skip(board, presentation), fields(first = %roster.first(), second = %roster.second()))]
    pub fn new(board: Board, roster: Roster, presentation: P) -> Self {
        let active = roster.first().symbol();
        Self {
            board,
            roster,
            presentation,
            phase: Phase::NotStarted,
            active,
            history: Vec::new(),
        }
    }

    /// Starts a session: clears the board and view, and hands the first
    /// move to the opener.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) {
        self.begin_session();
    }

    /// Dismisses any announcement, then starts a fresh session.
    ///
    /// Valid from every phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn restart(&mut self) {
        self.presentation.dismiss_announcement();
        self.begin_session();
    }

    fn begin_session(&mut self) {
        self.board.reset();
        self.history.clear();
        self.active = self.roster.first().symbol();
        self.phase = Phase::InProgress;
        self.presentation.reset_view();
        debug!(first = %self.roster.first(), "Session started");
    }

    /// Handles a slot selection by the active player.
    ///
    /// Selections outside a running session, out of range, or on a marked
    /// slot are ignored with no state change. A move that completes a line
    /// wins even if it also fills the board.
    #[instrument(skip(self), fields(active = %self.active, phase = %self.phase))]
    pub fn select_slot(&mut self, index: usize) -> Selection {
        match self.phase {
            Phase::NotStarted => return self.ignore(Ignored::NotStarted),
            Phase::Finished(_) => return self.ignore(Ignored::GameOver),
            Phase::InProgress => {}
        }

        let symbol = self.active;
        let position = match self.board.mark_slot(index, symbol) {
            Ok(position) => position,
            Err(e) => return self.ignore(Ignored::Slot(e)),
        };

        let placed = Move::new(symbol, position);
        self.history.push(placed);
        self.presentation.render_mark(position, symbol);

        if cfg!(debug_assertions) {
            assert_invariants(&self.session_view());
        }

        if let Some(line) = winning_line(&self.board, symbol) {
            debug!(?line, "Line completed");
            let winner = self.roster.by_symbol(symbol).clone();
            return self.finish(placed, Outcome::Winner(winner));
        }

        if self.board.is_full() {
            return self.finish(placed, Outcome::Draw);
        }

        self.active = symbol.opponent();
        debug!(%placed, next = %self.active, "Turn passed");
        Selection::Placed {
            placed,
            next: self.active,
        }
    }

    fn finish(&mut self, placed: Move, outcome: Outcome) -> Selection {
        info!(%outcome, moves = self.history.len(), "Game over");
        self.phase = Phase::Finished(outcome.clone());
        self.presentation.announce(&outcome.to_string());
        Selection::Finished { placed, outcome }
    }

    fn ignore(&self, reason: Ignored) -> Selection {
        debug!(%reason, "Selection ignored");
        Selection::Ignored(reason)
    }
}

impl<P> GameController<P> {
    /// Current lifecycle phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True once a win or draw has been reported.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// The outcome, once finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The player who moves next.
    pub fn active_player(&self) -> &Player {
        self.roster.by_symbol(self.active)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The two players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Moves accepted in the current session.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The presentation surface.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Mutable access to the presentation surface.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Consumes the controller, returning its presentation surface.
    pub fn into_presentation(self) -> P {
        self.presentation
    }

    /// Borrowed view for invariant checks.
    pub fn session_view(&self) -> SessionView<'_> {
        SessionView {
            board: &self.board,
            history: &self.history,
            first: self.roster.first().symbol(),
        }
    }

    /// Snapshot of the session.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            phase: self.phase.clone(),
            active: self.active,
            board: self.board.clone(),
            history: self.history.clone(),
        }
    }
}
