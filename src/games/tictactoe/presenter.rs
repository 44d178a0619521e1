//! The boundary between the engine and whatever draws it.
//!
//! A [`Session`] owns a [`Match`] and a [`Presenter`]. Input handlers call
//! the session; the session forwards every state change to the presenter
//! as a [`MatchEvent`]. Rejected input produces no event.

use super::engine::{Match, Snapshot};
use super::types::{Cell, Coord, Line, Mark};
use super::{MoveError, Outcome, Placement};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, instrument, warn};

/// Outcome as shown to a player, with the winner's display name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Win {
        /// Winning mark.
        mark: Mark,
        /// Winner's display name when the match was decided.
        name: String,
        /// Completed line.
        line: Line,
    },
    /// Board full, no line.
    Tie,
}

impl Verdict {
    /// Resolves the current outcome of `game`.
    pub fn of(game: &Match) -> Self {
        match (game.outcome(), game.winning_line()) {
            (Outcome::Win(mark), Some(line)) => Verdict::Win {
                mark,
                name: game.player(mark).name().to_string(),
                line,
            },
            (Outcome::Tie, _) => Verdict::Tie,
            _ => Verdict::InProgress,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Win { name, .. } => write!(f, "The winner is {}!", name),
            Verdict::Tie => write!(f, "It's a tied game!"),
        }
    }
}

/// A state change the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchEvent {
    /// One cell changed.
    CellChanged {
        /// Cell position.
        coord: Coord,
        /// New contents.
        cell: Cell,
    },
    /// Outcome after the latest move.
    OutcomeChanged(Verdict),
    /// Whole board replaced, at session start and on reset.
    BoardReset {
        /// Full match state.
        snapshot: Snapshot,
        /// Outcome of that state. Only in progress after a reset, but a
        /// session may start from a decided match.
        verdict: Verdict,
    },
    /// A player's display name changed.
    PlayerRenamed {
        /// Renamed player.
        mark: Mark,
        /// New display name.
        name: String,
    },
}

/// Receives engine events for rendering.
pub trait Presenter {
    /// Renders one event.
    fn present(&mut self, event: &MatchEvent);
}

/// Drives a [`Match`] on behalf of a presentation layer.
#[derive(Debug)]
pub struct Session<P> {
    game: Match,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    /// Wraps a fresh match and sends the initial board to `presenter`.
    #[instrument(skip(presenter))]
    pub fn new(presenter: P) -> Self {
        Self::with_match(Match::new(), presenter)
    }

    /// Wraps an existing match and sends its board to `presenter`.
    #[instrument(skip_all)]
    pub fn with_match(game: Match, mut presenter: P) -> Self {
        presenter.present(&board_reset(&game));
        Self { game, presenter }
    }

    /// The underlying match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the session, returning the match and presenter.
    pub fn into_parts(self) -> (Match, P) {
        (self.game, self.presenter)
    }

    /// Handles a cell activation.
    ///
    /// A legal move emits the changed cell then the new verdict. A rejected
    /// move emits nothing; the error is returned for callers that care.
    #[instrument(skip(self))]
    pub fn activate_cell(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        let placement = self.game.apply_move(row, col).inspect_err(|e| {
            debug!(error = %e, "Ignoring rejected activation");
        })?;
        self.presenter.present(&MatchEvent::CellChanged {
            coord: *placement.coord(),
            cell: Cell::Marked(*placement.mark()),
        });
        self.presenter
            .present(&MatchEvent::OutcomeChanged(Verdict::of(&self.game)));
        Ok(placement)
    }

    /// Resets the match and sends the cleared board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.presenter.present(&board_reset(&self.game));
    }

    /// Applies a confirmed name entry.
    #[instrument(skip(self))]
    pub fn confirm_name(&mut self, mark: Mark, name: Option<&str>) {
        self.game.set_player_name(mark, name);
        let name = self.game.player(mark).name().to_string();
        self.presenter
            .present(&MatchEvent::PlayerRenamed { mark, name });
    }
}

fn board_reset(game: &Match) -> MatchEvent {
    MatchEvent::BoardReset {
        snapshot: game.snapshot(),
        verdict: Verdict::of(game),
    }
}

/// Writes each event as a line of text.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, event: &MatchEvent) {
        let result = match event {
            MatchEvent::CellChanged { coord, cell } => match cell.mark() {
                Some(mark) => writeln!(self.out, "{} marks {}", mark, coord),
                None => writeln!(self.out, "{} cleared", coord),
            },
            MatchEvent::OutcomeChanged(Verdict::InProgress) => Ok(()),
            MatchEvent::OutcomeChanged(verdict) => writeln!(self.out, "{}", verdict),
            MatchEvent::BoardReset { snapshot, verdict } => {
                writeln!(self.out, "{}", snapshot.board).and_then(|()| match verdict {
                    Verdict::InProgress => writeln!(self.out, "{} to move", snapshot.to_move),
                    verdict => writeln!(self.out, "{}", verdict),
                })
            }
            MatchEvent::PlayerRenamed { mark, name } => {
                writeln!(self.out, "Player {} is now {}", mark, name)
            }
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to write match event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder(Vec<MatchEvent>);

    impl Presenter for Recorder {
        fn present(&mut self, event: &MatchEvent) {
            self.0.push(event.clone());
        }
    }

    #[test]
    fn test_session_start_sends_board() {
        let session = Session::new(Recorder::default());
        assert!(matches!(
            session.presenter().0.as_slice(),
            [MatchEvent::BoardReset {
                verdict: Verdict::InProgress,
                ..
            }]
        ));
    }

    #[test]
    fn test_rejected_activation_is_silent() {
        let mut session = Session::new(Recorder::default());
        session.activate_cell(0, 0).unwrap();
        let before = session.presenter().0.len();
        assert!(session.activate_cell(0, 0).is_err());
        assert!(session.activate_cell(3, 3).is_err());
        assert_eq!(session.presenter().0.len(), before);
    }

    #[test]
    fn test_win_verdict_uses_name_at_win_time() {
        let mut session = Session::new(Recorder::default());
        session.confirm_name(Mark::X, Some("Ada"));
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            session.activate_cell(row, col).unwrap();
        }
        let last = session.presenter().0.last().cloned();
        assert_eq!(
            last,
            Some(MatchEvent::OutcomeChanged(Verdict::Win {
                mark: Mark::X,
                name: "Ada".to_string(),
                line: Line::TopRow,
            }))
        );
    }

    #[test]
    fn test_text_presenter_transcript() {
        let mut session = Session::new(TextPresenter::new(Vec::new()));
        session.confirm_name(Mark::O, Some(""));
        session.activate_cell(1, 1).unwrap();
        let (_, presenter) = session.into_parts();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.starts_with(" | | \n-+-+-\n"));
        assert!(text.contains("X to move\n"));
        assert!(text.contains("Player O is now O\n"));
        assert!(text.ends_with("X marks (1, 1)\n"));
    }

    #[test]
    fn test_text_presenter_starts_from_decided_match() {
        let mut game = Match::new();
        game.set_player_name(Mark::X, Some("Ada"));
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        let session = Session::with_match(game, TextPresenter::new(Vec::new()));
        let (_, presenter) = session.into_parts();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.ends_with("X|X|X\n-+-+-\n |O| \n-+-+-\n | |O\nThe winner is Ada!\n"));
        assert!(!text.contains("to move"));
    }
}
