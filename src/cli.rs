//! Command-line interface for tictactoe_match.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tictactoe_match::parse_pair;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_match")]
#[command(about = "Two-player tic-tac-toe match engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match in the terminal
    Play {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Display name for player X
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for player O
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Apply a sequence of moves and print the result
    Replay {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final snapshot as JSON instead of a transcript
        #[arg(long)]
        json: bool,

        /// Moves as `row,col`, alternating from X
        #[arg(required = true, value_parser = parse_pair)]
        moves: Vec<(usize, usize)>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: None,
            x_name: None,
            o_name: None,
        }
    }
}
