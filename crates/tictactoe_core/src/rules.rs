//! Win detection over the eight fixed lines.

use super::board::Board;
use super::position::Position;
use super::types::{Square, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Every row, column and diagonal.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `symbol`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<[Position; 3]> {
    let mark = Square::Marked(symbol);
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks if `symbol` holds any complete line.
pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    winning_line(board, symbol).is_some()
}

/// Returns the symbol holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Symbol> {
    Symbol::iter().find(|symbol| has_won(board, *symbol))
}
