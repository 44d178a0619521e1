//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls
//! [`evaluate`] after every accepted move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winner;

use super::{Board, Line, Outcome};
use tracing::instrument;

/// Classifies a board: a completed line wins, otherwise a full board ties.
///
/// Returns the winning line alongside the outcome when there is one.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> (Outcome, Option<Line>) {
    if let Some((mark, line)) = find_winner(board) {
        (Outcome::Win(mark), Some(line))
    } else if is_full(board) {
        (Outcome::Tie, None)
    } else {
        (Outcome::InProgress, None)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cell, Coord, Mark};
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Marked(Mark::X),
                    'O' => Cell::Marked(Mark::O),
                    _ => Cell::Empty,
                };
                board.set(Coord::new(r, c).unwrap(), cell);
            }
        }
        board
    }

    #[test]
    fn test_evaluate_in_progress() {
        let board = board_from(["X..", ".O.", "..."]);
        assert_eq!(evaluate(&board), (Outcome::InProgress, None));
    }

    #[test]
    fn test_evaluate_tie() {
        let board = board_from(["XOX", "OOX", "XXO"]);
        assert_eq!(evaluate(&board), (Outcome::Tie, None));
    }

    #[test]
    fn test_evaluate_full_board_win_is_not_tie() {
        let board = board_from(["XOX", "OXO", "OXX"]);
        assert_eq!(
            evaluate(&board),
            (Outcome::Win(Mark::X), Some(Line::MainDiagonal))
        );
    }
}
