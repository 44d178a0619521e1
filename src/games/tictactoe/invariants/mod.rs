//! First-class invariants for a tic-tac-toe match.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds; they are also
//! testable independently.

pub mod mark_balance;
pub mod outcome_consistent;
pub mod single_turn;

pub use mark_balance::MarkBalance;
pub use outcome_consistent::OutcomeConsistent;
pub use single_turn::SingleTurnHolder;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

/// Every match invariant as one set.
pub type MatchInvariants = (SingleTurnHolder, MarkBalance, OutcomeConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Coord, Mark, Match};

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        assert!(MatchInvariants::check_all(&Match::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Match::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(MatchInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Match::new();
        game.board.set(Coord::new(0, 0).unwrap(), Cell::Marked(Mark::O));
        game.players[1].set_turn(true);

        let violations = MatchInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, SingleTurnHolder::description());
        assert_eq!(violations[1].description, MarkBalance::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SingleTurnHolder, OutcomeConsistent);
        assert!(TwoInvariants::check_all(&Match::new()).is_ok());
    }
}
