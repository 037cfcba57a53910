//! Shared test helpers.

#![allow(dead_code)]

use tictactoe::{Board, GameController, Position, Presentation, Roster, Symbol};

/// One presentation call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Mark(Position, Symbol),
    Announce(String),
    Reset,
    Dismiss,
}

/// Presentation double that records every call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    /// Announcements made so far.
    pub fn announcements(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Announce(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Presentation for Recorder {
    fn render_mark(&mut self, position: Position, symbol: Symbol) {
        self.events.push(Event::Mark(position, symbol));
    }

    fn announce(&mut self, message: &str) {
        self.events.push(Event::Announce(message.to_string()));
    }

    fn reset_view(&mut self) {
        self.events.push(Event::Reset);
    }

    fn dismiss_announcement(&mut self) {
        self.events.push(Event::Dismiss);
    }
}

/// A started game between "player1" (X) and "player2" (O).
pub fn started_game() -> GameController<Recorder> {
    let roster = Roster::new("player1", "player2").expect("valid roster");
    let mut game = GameController::new(Board::new(), roster, Recorder::default());
    game.start();
    game
}

/// Selects each index in turn.
pub fn play(game: &mut GameController<Recorder>, indices: &[usize]) {
    for &index in indices {
        game.select_slot(index);
    }
}
