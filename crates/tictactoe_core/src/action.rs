//! Accepted moves, recorded in session history.

use super::position::Position;
use super::types::Symbol;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A symbol written at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The symbol that was written.
    pub symbol: Symbol,
    /// Where it was written.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Symbol::O, Position::BottomCenter);
        assert_eq!(mov.to_string(), "O -> Bottom-center");
    }
}
