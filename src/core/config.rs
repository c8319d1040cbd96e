//! Game configuration.

use serde::{Deserialize, Serialize};

use super::mark::Mark;
use crate::error::GameError;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The mark that moves first after a reset (default: O).
    pub starting_mark: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_mark: Mark::O,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom starting mark.
    #[must_use]
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }

    /// Check that the config describes a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_mark.is_empty() {
            return Err(GameError::EmptyMark);
        }
        Ok(())
    }
}
