//! tictactoe_match - terminal tic-tac-toe
//!
//! Runs an interactive match, or replays a move list headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_match::{MatchConfig, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            x_name,
            o_name,
        } => run_play(config, x_name, o_name),
        Command::Replay {
            config,
            json,
            moves,
        } => run_replay(config, json, moves),
    }
}

/// Run an interactive match
fn run_play(config: Option<PathBuf>, x_name: Option<String>, o_name: Option<String>) -> Result<()> {
    let config = MatchConfig::load(config.as_deref())?.with_names(x_name, o_name);
    run_tui(&config)
}

/// Replay moves and print the result
fn run_replay(config: Option<PathBuf>, json: bool, moves: Vec<(usize, usize)>) -> Result<()> {
    let config = MatchConfig::load(config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), json, "Replaying moves");
    let report = replay(&config, &moves, json, std::io::stdout().lock())?;
    info!(rejected = report.rejected.len(), "Done");
    Ok(())
}
