//! Mark balance: X moves first and the players alternate.

use super::Invariant;
use crate::games::tictactoe::{Mark, Match};

/// Invariant: X has as many marks as O, or exactly one more.
///
/// The player to move is the one with fewer marks, X on a tie.
pub struct MarkBalance;

impl Invariant<Match> for MarkBalance {
    fn holds(game: &Match) -> bool {
        let xs = game.board().count(Mark::X);
        let os = game.board().count(Mark::O);
        let expected = match xs.checked_sub(os) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => return false,
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
