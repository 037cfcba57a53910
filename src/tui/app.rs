//! Application state and key handling.

use super::input::{Action, action_for};
use super::view::TerminalView;
use crossterm::event::KeyCode;
use tictactoe_core::{Board, GameController, Phase, Position, Presentation, Roster};
use tracing::{debug, instrument};

/// Terminal application: one controller plus the cursor.
#[derive(Debug)]
pub struct App {
    game: GameController<TerminalView>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application waiting for the first start.
    pub fn new(roster: Roster) -> Self {
        Self {
            game: GameController::new(Board::new(), roster, TerminalView::new()),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The controller.
    pub fn game(&self) -> &GameController<TerminalView> {
        &self.game
    }

    /// What the terminal shows.
    pub fn view(&self) -> &TerminalView {
        self.game.presentation()
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text.
    pub fn status(&self) -> String {
        match self.game.phase() {
            Phase::NotStarted => "Press 's' to start".to_string(),
            Phase::InProgress => {
                let player = self.game.active_player();
                let open = self.game.board().empty_positions().len();
                format!("{}'s turn ({}), {} open", player.name(), player.symbol(), open)
            }
            Phase::Finished(outcome) => format!("{}. Press 'r' to play again", outcome),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(self.cursor, key) else {
            return;
        };
        debug!(?action, "Key mapped");

        match action {
            Action::Cursor(position) => self.cursor = position,
            Action::Select(position) => {
                self.cursor = position;
                if self.view().accepts(position) {
                    self.game.select_slot(position.index());
                }
            }
            Action::Start => {
                if matches!(self.game.phase(), Phase::NotStarted) {
                    self.game.start();
                }
            }
            Action::Restart => {
                if !matches!(self.game.phase(), Phase::NotStarted) {
                    self.game.restart();
                }
            }
            Action::Dismiss => self.game.presentation_mut().dismiss_announcement(),
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Symbol;

    fn app() -> App {
        App::new(Roster::new("Ada", "Grace").unwrap())
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_selection_before_start_is_not_delivered() {
        let mut app = app();
        press(&mut app, "5");
        assert_eq!(app.game().board().marked_count(), 0);
        assert_eq!(app.status(), "Press 's' to start");
    }

    #[test]
    fn test_start_then_play() {
        let mut app = app();
        press(&mut app, "s5");
        assert_eq!(app.view().cell(Position::Center), Some(Symbol::X));
        assert_eq!(app.status(), "Grace's turn (O), 8 open");
    }

    #[test]
    fn test_arrows_and_enter() {
        let mut app = app();
        press(&mut app, "s");
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.view().cell(Position::TopLeft), Some(Symbol::X));
    }

    #[test]
    fn test_win_locks_board_and_restart_clears() {
        let mut app = app();
        press(&mut app, "s14253");
        assert!(app.game().is_game_over());
        assert_eq!(app.view().message(), Some("Ada is the Winner"));

        press(&mut app, "9");
        assert_eq!(app.game().history().len(), 5);

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.view().message(), None);
        press(&mut app, "9");
        assert_eq!(app.game().history().len(), 5);

        press(&mut app, "r");
        assert!(!app.game().is_game_over());
        assert_eq!(app.view().cell(Position::TopLeft), None);
        assert_eq!(app.status(), "Ada's turn (X), 9 open");
    }

    #[test]
    fn test_escape_dismisses_announcement_only() {
        let mut app = app();
        press(&mut app, "s14253");
        assert_eq!(app.view().message(), Some("Ada is the Winner"));

        app.handle_key(KeyCode::Esc);

        assert_eq!(app.view().message(), None);
        assert!(app.view().is_locked());
        assert_eq!(app.view().cell(Position::TopLeft), Some(Symbol::X));
        assert!(app.game().is_game_over());
    }

    #[test]
    fn test_start_key_ignored_mid_game() {
        let mut app = app();
        press(&mut app, "s1s");
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, "q");
        assert!(app.should_quit());
    }

    #[test]
    fn test_view_tracks_controller() {
        let mut app = app();
        press(&mut app, "s1597");
        for position in Position::ALL {
            assert_eq!(
                app.view().cell(position),
                app.game().board().get(position).symbol()
            );
        }
        let mut fresh = TerminalView::new();
        fresh.reset_view();
        assert_ne!(app.view(), &fresh);
    }
}
