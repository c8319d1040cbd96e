//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Mark};
use crate::error::GameError;
use crate::search::SearchConfig;

/// Who controls each mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlayMode {
    /// Both marks are played by people.
    TwoPlayer,
    /// `computer` is played by the search, the other mark by a person.
    VsComputer { computer: Mark },
}

impl Default for PlayMode {
    fn default() -> Self {
        PlayMode::VsComputer { computer: Mark::X }
    }
}

impl PlayMode {
    /// Get the mark the computer plays, if any.
    #[must_use]
    pub const fn computer(&self) -> Option<Mark> {
        match self {
            PlayMode::TwoPlayer => None,
            PlayMode::VsComputer { computer } => Some(*computer),
        }
    }

    /// Check that the computer, if any, plays a real mark.
    pub fn validate(&self) -> Result<(), GameError> {
        match self.computer() {
            Some(mark) if mark.is_empty() => Err(GameError::EmptyMark),
            _ => Ok(()),
        }
    }
}

/// Configuration for a run of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Per-game settings.
    pub game: GameConfig,

    /// Computer player settings.
    pub search: SearchConfig,

    /// Who plays which mark.
    pub mode: PlayMode,
}

impl SessionConfig {
    /// Create a new config with a custom game config.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Create a new config with a custom search config.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Create a new config with a custom play mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check every part of the config.
    pub fn validate(&self) -> Result<(), GameError> {
        self.game.validate()?;
        self.mode.validate()
    }
}
