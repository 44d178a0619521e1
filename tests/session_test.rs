//! Tests for the engine-to-presentation event stream.

use tictactoe_match::{Cell, Coord, Mark, MatchEvent, Presenter, Session, Verdict};

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<MatchEvent>,
}

impl Presenter for Recorder {
    fn present(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

fn drain(session: &mut Session<Recorder>) -> Vec<MatchEvent> {
    std::mem::take(&mut session.presenter_mut().events)
}

#[test]
fn test_legal_move_emits_cell_then_outcome() {
    let mut session = Session::new(Recorder::default());
    drain(&mut session);

    session.activate_cell(0, 2).unwrap();
    assert_eq!(
        drain(&mut session),
        vec![
            MatchEvent::CellChanged {
                coord: Coord::new(0, 2).unwrap(),
                cell: Cell::Marked(Mark::X),
            },
            MatchEvent::OutcomeChanged(Verdict::InProgress),
        ]
    );
}

#[test]
fn test_tie_reported() {
    let mut session = Session::new(Recorder::default());
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (2, 0),
        (1, 0),
        (1, 2),
        (2, 2),
        (2, 1),
    ] {
        session.activate_cell(row, col).unwrap();
    }
    assert_eq!(
        session.presenter().events.last(),
        Some(&MatchEvent::OutcomeChanged(Verdict::Tie))
    );
    assert_eq!(Verdict::Tie.to_string(), "It's a tied game!");
}

#[test]
fn test_reset_emits_full_snapshot() {
    let mut session = Session::new(Recorder::default());
    session.activate_cell(1, 1).unwrap();
    drain(&mut session);

    session.reset();
    let events = drain(&mut session);
    assert_eq!(events.len(), 1);
    match &events[0] {
        MatchEvent::BoardReset { snapshot, verdict } => {
            assert_eq!(verdict, &Verdict::InProgress);
            assert_eq!(snapshot.board.empty_count(), 9);
            assert_eq!(snapshot.to_move, Mark::X);
            assert_eq!(snapshot.players.len(), 2);
        }
        other => panic!("Expected BoardReset, got {:?}", other),
    }
}

#[test]
fn test_rename_emits_resolved_name() {
    let mut session = Session::new(Recorder::default());
    drain(&mut session);

    session.confirm_name(Mark::X, Some("  "));
    session.confirm_name(Mark::O, Some("Grace"));
    assert_eq!(
        drain(&mut session),
        vec![
            MatchEvent::PlayerRenamed {
                mark: Mark::X,
                name: "X".to_string(),
            },
            MatchEvent::PlayerRenamed {
                mark: Mark::O,
                name: "Grace".to_string(),
            },
        ]
    );
}
