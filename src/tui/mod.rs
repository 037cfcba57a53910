//! Terminal UI for tic-tac-toe

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use view::TerminalView;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{error, info, instrument, warn};

/// Run the TUI until the user quits.
#[instrument(skip(config, log_file), fields(log_file = %log_file.display()))]
pub fn run_tui(config: &GameConfig, log_file: &Path) -> Result<()> {
    // Log to a file so output doesn't fight the UI for the terminal
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(player_one = %config.player_one(), player_two = %config.player_two(), "Starting TUI");
    let mut app = App::new(config.roster()?);

    enable_raw_mode()?;
    let mut terminal = or_undo(
        || -> Result<_> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

/// Runs `setup`, calling `undo` before passing on any error.
fn or_undo<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| undo())
}

/// Leaves raw mode and the alternate screen after a failed setup.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Draws, then blocks for the next key; one event is handled at a time.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
