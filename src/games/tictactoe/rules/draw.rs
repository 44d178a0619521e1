//! Full-board detection for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}
