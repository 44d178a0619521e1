//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Line, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Lines are checked rows first, then columns, then the main and anti
/// diagonals. Returns the owning mark and the line.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Mark, Line)> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Cell::Marked(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
