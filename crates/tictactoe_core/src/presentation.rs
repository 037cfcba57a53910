//! Outbound interface to whatever draws the game.

use super::position::Position;
use super::types::Symbol;

/// A surface the controller reports to.
///
/// Rendering is a projection of controller state; the surface never feeds
/// marks back. It only delivers selections for slots it shows as empty,
/// and none at all once an announcement is showing.
pub trait Presentation {
    /// Draws `symbol` in the cell at `position`.
    fn render_mark(&mut self, position: Position, symbol: Symbol);

    /// Shows a terminal message (winner or draw).
    fn announce(&mut self, message: &str);

    /// Clears all marks for a fresh session.
    fn reset_view(&mut self);

    /// Hides a message shown by [`Presentation::announce`].
    fn dismiss_announcement(&mut self) {}
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn render_mark(&mut self, position: Position, symbol: Symbol) {
        (**self).render_mark(position, symbol);
    }

    fn announce(&mut self, message: &str) {
        (**self).announce(message);
    }

    fn reset_view(&mut self) {
        (**self).reset_view();
    }

    fn dismiss_announcement(&mut self) {
        (**self).dismiss_announcement();
    }
}
