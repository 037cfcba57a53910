//! Terminal projection of the game, fed only by presentation calls.

use tictactoe_core::{Position, Presentation, Symbol};
use tracing::debug;

/// What the terminal shows.
///
/// Cells are a copy of what the controller rendered; input is locked
/// before the first session and after an announcement until the next
/// reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalView {
    cells: [Option<Symbol>; 9],
    message: Option<String>,
    locked: bool,
}

impl TerminalView {
    /// Creates a locked, empty view.
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            message: None,
            locked: true,
        }
    }

    /// Symbol drawn at `position`, if any.
    pub fn cell(&self, position: Position) -> Option<Symbol> {
        self.cells[position.index()]
    }

    /// Announcement currently on screen.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while selections are not delivered.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a selection at `position` may be delivered.
    pub fn accepts(&self, position: Position) -> bool {
        !self.locked && self.cell(position).is_none()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation for TerminalView {
    fn render_mark(&mut self, position: Position, symbol: Symbol) {
        self.cells[position.index()] = Some(symbol);
    }

    fn announce(&mut self, message: &str) {
        debug!(message, "Showing announcement");
        self.message = Some(message.to_string());
        self.locked = true;
    }

    fn reset_view(&mut self) {
        self.cells = [None; 9];
        self.message = None;
        self.locked = false;
    }

    fn dismiss_announcement(&mut self) {
        self.message = None;
    }
}
