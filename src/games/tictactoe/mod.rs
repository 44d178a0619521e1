//! Tic-tac-toe match engine.

mod action;
mod engine;
pub mod invariants;
mod outcome;
mod player;
mod presenter;
pub mod rules;
mod types;

pub use action::{MoveError, Placement};
pub use engine::{Match, PlayerView, Snapshot};
pub use outcome::Outcome;
pub use player::Player;
pub use presenter::{MatchEvent, Presenter, Session, TextPresenter, Verdict};
pub use types::{Board, Cell, Coord, Line, Mark, ParseMoveError, SIZE, parse_pair};
