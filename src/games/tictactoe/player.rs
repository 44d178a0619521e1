//! Player records.

use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the two participants in a match.
///
/// The mark is fixed at creation. The display name falls back to the mark
/// string whenever no name has been set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    name: Option<String>,
    has_turn: bool,
}

impl Player {
    /// Creates an unnamed player. X starts with the turn.
    #[instrument]
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            name: None,
            has_turn: mark == Mark::X,
        }
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Display name, or the mark string if none is set.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.mark.as_str())
    }

    /// True if this player moves next.
    pub fn has_turn(&self) -> bool {
        self.has_turn
    }

    /// Sets the display name as given. Empty or blank input clears it.
    #[instrument(skip(self), fields(mark = %self.mark))]
    pub fn set_name(&mut self, name: Option<&str>) {
        self.name = name
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string);
        debug!(name = %self.name(), "Player name set");
    }

    pub(crate) fn set_turn(&mut self, has_turn: bool) {
        self.has_turn = has_turn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let x = Player::new(Mark::X);
        let o = Player::new(Mark::O);
        assert_eq!(x.name(), "X");
        assert_eq!(o.name(), "O");
        assert!(x.has_turn());
        assert!(!o.has_turn());
    }

    #[test]
    fn test_set_name() {
        let mut player = Player::new(Mark::O);
        player.set_name(Some("Ada"));
        assert_eq!(player.name(), "Ada");
        player.set_name(Some("Ada"));
        assert_eq!(player.name(), "Ada");
    }

    #[test]
    fn test_name_kept_verbatim() {
        let mut player = Player::new(Mark::X);
        player.set_name(Some("  Ada "));
        assert_eq!(player.name(), "  Ada ");
    }

    #[test]
    fn test_blank_name_falls_back_to_mark() {
        let mut player = Player::new(Mark::X);
        player.set_name(Some("Ada"));
        player.set_name(Some(""));
        assert_eq!(player.name(), "X");
        player.set_name(Some("   "));
        assert_eq!(player.name(), "X");
        player.set_name(None);
        assert_eq!(player.name(), "X");
    }
}
