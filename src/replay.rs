//! Headless replay of a move list.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{info, instrument, warn};

use crate::config::MatchConfig;
use crate::games::tictactoe::{
    Mark, Match, MoveError, Presenter, Session, Snapshot, TextPresenter, Verdict,
};

/// What a replay did.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// State after the last move.
    pub snapshot: Snapshot,
    /// Moves the engine refused, in input order.
    pub rejected: Vec<((usize, usize), MoveError)>,
}

/// Applies `moves` to a fresh match named from `config`.
///
/// Writes a transcript and the final board to `out`, or the final
/// [`Snapshot`] as JSON when `json` is set. Rejected moves are reported
/// and skipped.
#[instrument(skip(config, moves, out), fields(move_count = moves.len()))]
pub fn replay<W: Write>(
    config: &MatchConfig,
    moves: &[(usize, usize)],
    json: bool,
    mut out: W,
) -> Result<ReplayReport> {
    let mut game = Match::new();
    game.set_player_name(Mark::X, config.player_x().as_deref());
    game.set_player_name(Mark::O, config.player_o().as_deref());

    let report = if json {
        let (game, rejected) = drive(Session::with_match(game, TextPresenter::new(io::sink())), moves);
        let snapshot = game.snapshot();
        serde_json::to_writer_pretty(&mut out, &snapshot).context("Failed to write snapshot")?;
        writeln!(out)?;
        ReplayReport { snapshot, rejected }
    } else {
        let (game, rejected) = drive(Session::with_match(game, TextPresenter::new(&mut out)), moves);
        for ((row, col), e) in &rejected {
            writeln!(out, "Move {},{} rejected: {}", row, col, e)?;
        }
        writeln!(out, "{}", game.board())?;
        match Verdict::of(&game) {
            Verdict::InProgress => {
                writeln!(out, "{}'s turn", game.player(game.to_move()).name())?
            }
            verdict => writeln!(out, "{}", verdict)?,
        }
        ReplayReport {
            snapshot: game.snapshot(),
            rejected,
        }
    };

    info!(
        outcome = ?report.snapshot.outcome,
        rejected = report.rejected.len(),
        "Replay finished"
    );
    Ok(report)
}

fn drive<P: Presenter>(
    mut session: Session<P>,
    moves: &[(usize, usize)],
) -> (Match, Vec<((usize, usize), MoveError)>) {
    let mut rejected = Vec::new();
    for &(row, col) in moves {
        if let Err(e) = session.activate_cell(row, col) {
            warn!(row, col, error = %e, "Move rejected");
            rejected.push(((row, col), e));
        }
    }
    let (game, _) = session.into_parts();
    (game, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Outcome;

    #[test]
    fn test_replay_text_win() {
        let mut out = Vec::new();
        let report = replay(
            &MatchConfig::default(),
            &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)],
            false,
            &mut out,
        )
        .unwrap();
        assert_eq!(report.snapshot.outcome, Outcome::Win(Mark::X));
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("X|X|X\n-+-+-\n |O| \n-+-+-\n | |O\nThe winner is X!\n"));
    }

    #[test]
    fn test_replay_reports_rejections() {
        let mut out = Vec::new();
        let report = replay(
            &MatchConfig::default(),
            &[(0, 0), (0, 0), (4, 1)],
            false,
            &mut out,
        )
        .unwrap();
        assert_eq!(report.rejected.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Move 0,0 rejected"));
        assert!(text.contains("Move 4,1 rejected"));
        assert!(text.ends_with("O's turn\n"));
    }

    #[test]
    fn test_replay_json() {
        let mut out = Vec::new();
        replay(&MatchConfig::default(), &[(1, 1)], true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["board"][1][1], "X");
        assert_eq!(value["to_move"], "O");
    }
}
