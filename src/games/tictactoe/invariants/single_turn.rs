//! Exactly one player holds the turn flag.

use super::Invariant;
use crate::games::tictactoe::Match;

/// Invariant: exactly one of the two players may move next.
pub struct SingleTurnHolder;

impl Invariant<Match> for SingleTurnHolder {
    fn holds(game: &Match) -> bool {
        game.players().iter().filter(|p| p.has_turn()).count() == 1
    }

    fn description() -> &'static str {
        "Exactly one player holds the turn"
    }
}
