//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Select a slot.
    Select(Position),
    /// Start the first session.
    Start,
    /// Start over.
    Restart,
    /// Close the announcement.
    Dismiss,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action, given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Select),
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys; stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
