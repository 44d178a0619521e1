//! Stored outcome matches the board.

use super::Invariant;
use crate::games::tictactoe::{Match, rules};

/// Invariant: the recorded outcome and winning line are what the rules
/// derive from the current board.
pub struct OutcomeConsistent;

impl Invariant<Match> for OutcomeConsistent {
    fn holds(game: &Match) -> bool {
        rules::evaluate(game.board()) == (game.outcome(), game.winning_line())
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}
