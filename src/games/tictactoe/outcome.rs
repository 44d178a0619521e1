//! Match outcome.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Where a match stands after the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(Mark),
    /// Board is full and nobody completed a line.
    Tie,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// True once the match has been won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
