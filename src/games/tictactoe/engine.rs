//! The match engine.
//!
//! [`Match`] owns the board and both players. Every operation runs to
//! completion synchronously; moves are validated before anything is
//! written, so a rejected move never leaves partial state behind.

use super::action::{MoveError, Placement};
use super::invariants::{InvariantSet, MatchInvariants};
use super::player::Player;
use super::rules;
use super::types::{Board, Cell, Coord, Line, Mark};
use super::Outcome;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A single tic-tac-toe match between X and O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) outcome: Outcome,
    pub(crate) winning_line: Option<Line>,
}

impl Match {
    /// Starts a fresh match: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(Mark::X), Player::new(Mark::O)],
            outcome: Outcome::InProgress,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the completed line if the match was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[slot(mark)]
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome.winner().map(|mark| self.player(mark))
    }

    /// Mark of the player whose turn flag is set.
    pub fn to_move(&self) -> Mark {
        if self.players[slot(Mark::O)].has_turn() {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Empty cells in row-major order. Empty once the match is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        self.board
            .cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Marks `(row, col)` for the player to move.
    ///
    /// # Errors
    ///
    /// Rejects the move without touching any state if the match is over,
    /// the coordinate is off the board, or the cell is occupied.
    #[instrument(skip(self), fields(mark = %self.to_move()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        if self.outcome.is_over() {
            debug!(outcome = %self.outcome, "Move rejected, match is over");
            return Err(MoveError::GameOver);
        }

        let coord = Coord::new(row, col).ok_or_else(|| {
            debug!("Move rejected, off the board");
            MoveError::OutOfBounds { row, col }
        })?;

        if !self.board.is_empty(coord) {
            debug!(%coord, "Move rejected, cell occupied");
            return Err(MoveError::Occupied(coord));
        }

        let mark = self.to_move();
        self.board.set(coord, Cell::Marked(mark));
        self.players[slot(mark)].set_turn(false);
        self.players[slot(mark.opponent())].set_turn(true);

        let (outcome, line) = rules::evaluate(&self.board);
        self.outcome = outcome;
        self.winning_line = line;

        match outcome {
            Outcome::Win(winner) => {
                info!(%winner, line = ?line, name = %self.player(winner).name(), "Match won")
            }
            Outcome::Tie => info!("Match tied"),
            Outcome::InProgress => debug!(%coord, "Move applied"),
        }
        self.debug_check();

        Ok(Placement::new(coord, mark, outcome, line))
    }

    /// Clears the board and outcome and gives X the turn. Names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = Outcome::InProgress;
        self.winning_line = None;
        self.players[slot(Mark::X)].set_turn(true);
        self.players[slot(Mark::O)].set_turn(false);
        info!("Match reset");
        self.debug_check();
    }

    /// Sets a player's display name. `None` or blank restores the mark.
    #[instrument(skip(self))]
    pub fn set_player_name(&mut self, mark: Mark, name: Option<&str>) {
        self.players[slot(mark)].set_name(name);
    }

    /// Serializable view of the whole match.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            players: self.players.iter().map(PlayerView::from).collect(),
            to_move: self.to_move(),
            outcome: self.outcome,
            winning_line: self.winning_line,
        }
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = MatchInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

/// Player fields as shown to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    /// Player's mark.
    pub mark: Mark,
    /// Display name.
    pub name: String,
    /// Whether the player moves next.
    pub has_turn: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            mark: player.mark(),
            name: player.name().to_string(),
            has_turn: player.has_turn(),
        }
    }
}

/// Full state of a match at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board rows.
    pub board: Board,
    /// Both players, X first.
    pub players: Vec<PlayerView>,
    /// Mark to move next.
    pub to_move: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Winning line, if the match was won.
    pub winning_line: Option<Line>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Match, moves: &[(usize, usize)]) -> Outcome {
        for &(row, col) in moves {
            game.apply_move(row, col).expect("legal move");
        }
        game.outcome()
    }

    #[test]
    fn test_new_match() {
        let game = Match::new();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.board().empty_count(), 9);
        assert_eq!(game.legal_moves().len(), 9);
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let mut game = Match::new();
        let placement = game.apply_move(1, 1).unwrap();
        assert_eq!(placement.mark(), &Mark::X);
        assert_eq!(placement.outcome(), &Outcome::InProgress);
        assert_eq!(game.to_move(), Mark::O);
        assert!(!game.player(Mark::X).has_turn());
        assert!(game.player(Mark::O).has_turn());
    }

    #[test]
    fn test_top_row_win() {
        let mut game = Match::new();
        let outcome = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(outcome, Outcome::Win(Mark::X));
        assert_eq!(game.winning_line(), Some(Line::TopRow));
        assert_eq!(game.winner().map(Player::name), Some("X"));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_rejection_precedence() {
        let mut game = Match::new();
        game.apply_move(0, 0).unwrap();
        assert_eq!(
            game.apply_move(5, 0),
            Err(MoveError::OutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(
            game.apply_move(0, 0),
            Err(MoveError::Occupied(Coord::new(0, 0).unwrap()))
        );

        play(&mut game, &[(1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.apply_move(9, 9), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(0, 0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_reset_keeps_names() {
        let mut game = Match::new();
        game.set_player_name(Mark::O, Some("Grace"));
        play(&mut game, &[(0, 0), (1, 1)]);
        game.reset();
        assert_eq!(game.player(Mark::O).name(), "Grace");
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_snapshot_json() {
        let mut game = Match::new();
        game.apply_move(2, 0).unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["to_move"], "O");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["board"][2][0], "X");
        assert_eq!(json["players"][1]["name"], "O");
        assert!(json["winning_line"].is_null());
    }
}
