//! Terminal UI for an interactive match.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::MatchConfig;
use crate::games::tictactoe::{Mark, Match};

pub use app::{App, NameEntry, StatusFeed};

/// Runs an interactive match until the user quits.
pub fn run_tui(config: &MatchConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let mut game = Match::new();
    game.set_player_name(Mark::X, config.player_x().as_deref());
    game.set_player_name(Mark::O, config.player_o().as_deref());
    let mut app = App::new(game);

    enable_raw_mode()?;
    let res = open_terminal().and_then(|mut terminal| {
        let res = run_loop(&mut terminal, &mut app);
        terminal.show_cursor()?;
        res
    });
    restore_terminal()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(outcome = %app.game().outcome(), "TUI closed");
    res
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen, whether or not setup finished.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draws, then blocks for the next key, until the app asks to quit.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
