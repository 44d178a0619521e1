//! tictactoe_match - a two-player tic-tac-toe match engine
//!
//! The engine owns a 3x3 board and two players, applies moves for
//! whoever holds the turn, and classifies the match after every move.
//!
//! # Architecture
//!
//! - **Engine**: [`Match`] applies moves, resets, and renames players
//! - **Rules**: row, column, and diagonal win detection plus tie detection
//! - **Presenter**: [`Session`] forwards every state change to a [`Presenter`]
//! - **TUI**: an interactive terminal front end built on ratatui
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{Match, Mark, Outcome};
//!
//! let mut game = Match::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, col).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Match engine
pub use games::tictactoe::{
    Board, Cell, Coord, Line, Mark, Match, MoveError, Outcome, ParseMoveError, Placement, Player,
    PlayerView, SIZE, Snapshot, parse_pair,
};

// Crate-level exports - Presentation boundary
pub use games::tictactoe::{MatchEvent, Presenter, Session, TextPresenter, Verdict};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalance, MatchInvariants, OutcomeConsistent,
    SingleTurnHolder,
};
pub use games::tictactoe::rules::{evaluate, find_winner, is_full};

// Crate-level exports - Front ends
pub use replay::{ReplayReport, replay};
pub use tui::{App, NameEntry, StatusFeed, run_tui};
