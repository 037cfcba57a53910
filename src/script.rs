//! Scripted play: a line-oriented presentation surface.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tictactoe_core::{Board, GameController, Position, Presentation, SessionSummary, Symbol};
use tracing::{info, instrument, warn};

/// Writes one line per notification to `out`.
///
/// Presentation calls cannot fail, so the first write error is held and
/// returned by [`ScriptedView::finish`].
#[derive(Debug)]
pub struct ScriptedView<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ScriptedView<W> {
    /// Creates a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Script output failed");
            self.error = Some(e);
        }
    }

    /// Writes the final board grid.
    pub fn board(&mut self, board: &Board) {
        self.line(format_args!("{}", board));
    }

    /// Writes the session summary as pretty JSON.
    pub fn json(&mut self, summary: &SessionSummary) {
        if self.error.is_some() {
            return;
        }
        let written = serde_json::to_writer_pretty(&mut self.out, summary)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = written {
            warn!(error = %e, "Script output failed");
            self.error = Some(e);
        }
    }

    /// Flushes and returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Presentation for ScriptedView<W> {
    fn render_mark(&mut self, position: Position, symbol: Symbol) {
        self.line(format_args!("{} -> {} ({})", symbol, position, position.index()));
    }

    fn announce(&mut self, message: &str) {
        self.line(format_args!("{}", message));
    }

    fn reset_view(&mut self) {
        self.line(format_args!("New game"));
    }
}

/// Plays `moves` as slot selections in a fresh session.
///
/// Selections the controller ignores (out of range, occupied, after the
/// game ended) produce no output. Ends with the board grid, or with the
/// JSON summary when `json` is set.
#[instrument(skip(config, moves, out), fields(move_count = moves.len()))]
pub fn run_script<W: Write>(
    config: &GameConfig,
    moves: &[usize],
    json: bool,
    out: W,
) -> Result<SessionSummary> {
    let roster = config.roster()?;
    let mut game = GameController::new(Board::new(), roster, ScriptedView::new(out));
    game.start();

    for &index in moves {
        game.select_slot(index);
    }

    let summary = game.summary();
    info!(phase = %summary.phase, accepted = summary.history.len(), "Script finished");

    let mut view = game.into_presentation();
    if json {
        view.json(&summary);
    } else {
        view.board(&summary.board);
    }
    view.finish().context("Failed to write script output")?;

    Ok(summary)
}
