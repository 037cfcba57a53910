//! First-class invariants over a running session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The controller checks them in debug builds; they can also be
//! tested on their own.

use super::action::Move;
use super::board::Board;
use super::types::{Square, Symbol};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Borrowed snapshot of the parts of a session the invariants inspect.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    /// The board.
    pub board: &'a Board,
    /// Moves accepted since the session started.
    pub history: &'a [Move],
    /// Symbol of the player who opened the session.
    pub first: Symbol,
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: the mark count equals the number of non-empty slots.
pub struct MarkCountConsistent;

impl<'a> Invariant<SessionView<'a>> for MarkCountConsistent {
    fn holds(view: &SessionView<'a>) -> bool {
        let filled = view
            .board
            .squares()
            .iter()
            .filter(|s| !s.is_empty())
            .count();
        filled == view.board.marked_count()
    }

    fn description() -> &'static str {
        "Mark count matches the number of marked slots"
    }
}

/// Invariant: the opener has as many marks as the other player, or one more.
pub struct FirstPlayerLeads;

impl<'a> Invariant<SessionView<'a>> for FirstPlayerLeads {
    fn holds(view: &SessionView<'a>) -> bool {
        let first = view.board.count(view.first);
        let second = view.board.count(view.first.opponent());
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Players alternate, starting with the opener"
    }
}

/// Invariant: every recorded move is on the board, and nothing else is.
pub struct HistoryMatchesBoard;

impl<'a> Invariant<SessionView<'a>> for HistoryMatchesBoard {
    fn holds(view: &SessionView<'a>) -> bool {
        view.history.len() == view.board.marked_count()
            && view
                .history
                .iter()
                .all(|m| view.board.get(m.position) == Square::Marked(m.symbol))
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (MarkCountConsistent, FirstPlayerLeads, HistoryMatchesBoard);

/// Checks every session invariant, logging each violation.
///
/// Panics in debug builds if any invariant fails.
#[instrument(skip(view), fields(marked = view.board.marked_count()))]
pub(crate) fn assert_invariants(view: &SessionView<'_>) {
    if let Err(violations) = SessionInvariants::check_all(view) {
        for violation in &violations {
            warn!(%violation, "Session invariant failed");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated: {violations:?}");
    }
}
