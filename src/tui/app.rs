//! Application state and key handling.

use crate::games::tictactoe::{Coord, Mark, Match, MatchEvent, Presenter, Session, Verdict};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use super::input::{digit_to_coord, move_cursor};

/// Presenter that keeps what the status area shows.
#[derive(Debug)]
pub struct StatusFeed {
    verdict: Verdict,
    notice: String,
}

impl StatusFeed {
    fn new() -> Self {
        Self {
            verdict: Verdict::InProgress,
            notice: String::new(),
        }
    }

    /// Latest verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Latest one-line notice.
    pub fn notice(&self) -> &str {
        &self.notice
    }
}

impl Presenter for StatusFeed {
    fn present(&mut self, event: &MatchEvent) {
        debug!(?event, "Presenting match event");
        match event {
            MatchEvent::CellChanged { coord, cell } => {
                if let Some(mark) = cell.mark() {
                    self.notice = format!("{} played {}", mark, coord);
                }
            }
            MatchEvent::OutcomeChanged(verdict) => self.verdict = verdict.clone(),
            MatchEvent::BoardReset { snapshot, verdict } => {
                self.verdict = verdict.clone();
                self.notice = match verdict {
                    Verdict::InProgress => {
                        format!("New match. {} moves next.", snapshot.to_move)
                    }
                    _ => "Match already decided.".to_string(),
                };
            }
            MatchEvent::PlayerRenamed { mark, name } => {
                self.notice = format!("Player {} is now {}", mark, name);
            }
        }
    }
}

/// A name being typed for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    /// Player being renamed.
    pub mark: Mark,
    /// Text typed so far.
    pub buffer: String,
}

/// Main application state.
pub struct App {
    session: Session<StatusFeed>,
    cursor: Coord,
    entry: Option<NameEntry>,
    should_quit: bool,
}

impl App {
    /// Creates an application around `game`.
    pub fn new(game: Match) -> Self {
        Self {
            session: Session::with_match(game, StatusFeed::new()),
            cursor: Coord::CENTER,
            entry: None,
            should_quit: false,
        }
    }

    /// The match being played.
    pub fn game(&self) -> &Match {
        self.session.game()
    }

    /// Status area contents.
    pub fn feed(&self) -> &StatusFeed {
        self.session.presenter()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Name entry in progress, if any.
    pub fn entry(&self) -> Option<&NameEntry> {
        self.entry.as_ref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status line.
    pub fn status_message(&self) -> String {
        match self.feed().verdict() {
            Verdict::InProgress => {
                let mover = self.game().player(self.game().to_move());
                format!("{}'s turn ({})", mover.name(), mover.mark())
            }
            verdict => format!("{} Press 'r' to play again.", verdict),
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.entry.is_some() {
            self.handle_entry_key(key.code);
        } else {
            self.handle_board_key(key.code);
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.session.reset(),
            KeyCode::Char('x') => self.begin_entry(Mark::X),
            KeyCode::Char('o') => self.begin_entry(Mark::O),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Char(c) => {
                if let Some(coord) = digit_to_coord(c) {
                    self.cursor = coord;
                    self.activate(coord);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_entry_key(&mut self, code: KeyCode) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        match code {
            KeyCode::Enter => {
                if let Some(entry) = self.entry.take() {
                    self.session
                        .confirm_name(entry.mark, Some(entry.buffer.as_str()));
                }
            }
            KeyCode::Esc => {
                debug!(mark = %entry.mark, "Name entry cancelled");
                self.entry = None;
            }
            KeyCode::Backspace => {
                entry.buffer.pop();
            }
            KeyCode::Char(c) if !c.is_control() => entry.buffer.push(c),
            _ => {}
        }
    }

    fn begin_entry(&mut self, mark: Mark) {
        debug!(%mark, "Name entry started");
        self.entry = Some(NameEntry {
            mark,
            buffer: String::new(),
        });
    }

    fn activate(&mut self, coord: Coord) {
        // Rejections are shown by the board not changing.
        let _ = self.session.activate_cell(coord.row(), coord.col());
    }
}
