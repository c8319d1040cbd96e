//! Running score across games.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::rules::Outcome;

/// Wins per mark and draws.
///
/// Serializes as `{"X":..,"O":..,"D":..}` so a caller can persist it as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
    #[serde(rename = "D")]
    pub draws: u32,
}

impl ScoreTally {
    /// Create an all-zero tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. `Ongoing` is ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x += 1,
            Outcome::Win { mark: Mark::O, .. } => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Win { .. } | Outcome::Ongoing => {}
        }
    }

    /// Wins for `mark`.
    #[must_use]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }

    /// Number of finished games.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.x + self.o + self.draws
    }

    /// Zero every count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
