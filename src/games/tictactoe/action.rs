//! Move results and rejections.
//!
//! An accepted move yields a [`Placement`] describing exactly what changed.
//! A rejected move yields a [`MoveError`] and changes nothing.

use super::{Coord, Line, Mark, Outcome};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::Serialize;

/// An accepted move: the cell written and the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct Placement {
    /// Cell that was marked.
    coord: Coord,
    /// Mark written to the cell.
    mark: Mark,
    /// Outcome after the move.
    outcome: Outcome,
    /// Winning line, when the move won the match.
    line: Option<Line>,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The match has already been won or tied.
    #[display("Match is already over")]
    GameOver,

    /// The coordinate is off the board.
    #[display("Coordinate ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Coord),
}
