//! The 3x3 board and its mark count.

use super::position::Position;
use super::types::{Square, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// Reasons a slot cannot be marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SlotError {
    /// Index is outside 0-8.
    #[display("Slot index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Slot already holds a symbol.
    #[display("Slot {} is already marked", _0)]
    Occupied(Position),
}

impl std::error::Error for SlotError {}

/// 3x3 tic-tac-toe board.
///
/// `marked` always equals the number of non-empty slots. A marked slot
/// stays marked until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Slots in row-major order (0-8).
    pub(crate) slots: [Square; 9],
    /// Number of non-empty slots.
    pub(crate) marked: usize,
}

impl Board {
    /// Number of slots on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            slots: [Square::Empty; Self::SIZE],
            marked: 0,
        }
    }

    /// Writes `symbol` into the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] for an index past 8 and
    /// [`SlotError::Occupied`] if the slot is already marked. The board is
    /// unchanged in both cases.
    #[instrument(skip(self), fields(marked = self.marked))]
    pub fn mark_slot(&mut self, index: usize, symbol: Symbol) -> Result<Position, SlotError> {
        let position = Position::from_index(index).ok_or(SlotError::OutOfRange(index))?;

        if !self.is_empty(position) {
            return Err(SlotError::Occupied(position));
        }

        self.slots[position.index()] = Square::Marked(symbol);
        self.marked += 1;
        debug!(%position, %symbol, marked = self.marked, "Slot marked");
        Ok(position)
    }

    /// Reads the slot at `index`, `None` if the index is out of range.
    pub fn slot_at(&self, index: usize) -> Option<Square> {
        self.slots.get(index).copied()
    }

    /// Reads the slot at a position.
    pub fn get(&self, position: Position) -> Square {
        self.slots[position.index()]
    }

    /// Checks if the slot at a position is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// True once every slot holds a symbol.
    pub fn is_full(&self) -> bool {
        self.marked == Self::SIZE
    }

    /// Number of non-empty slots.
    pub fn marked_count(&self) -> usize {
        self.marked
    }

    /// Number of slots holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.slots
            .iter()
            .filter(|s| **s == Square::Marked(symbol))
            .count()
    }

    /// Returns all slots as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.slots
    }

    /// Positions that can still be selected.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Clears every slot.
    #[instrument(skip(self), fields(marked = self.marked))]
    pub fn reset(&mut self) {
        self.slots = [Square::Empty; Self::SIZE];
        self.marked = 0;
        debug!("Board reset");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid of marks; empty slots show their 1-based slot number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.slots[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Marked(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
