//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark written into a slot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Cross (moves first by convention).
    X,
    /// Nought.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nothing written yet.
    Empty,
    /// Holds a symbol.
    Marked(Symbol),
}

impl Square {
    /// Returns the symbol in this slot, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Marked(symbol) => Some(symbol),
        }
    }

    /// Returns true if nothing has been written here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::X.to_string(), "X");
        assert_eq!(Symbol::O.to_string(), "O");
    }

    #[test]
    fn test_square_symbol() {
        assert_eq!(Square::Empty.symbol(), None);
        assert_eq!(Square::Marked(Symbol::O).symbol(), Some(Symbol::O));
        assert!(Square::Empty.is_empty());
        assert!(!Square::Marked(Symbol::X).is_empty());
    }
}
