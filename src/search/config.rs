//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How the search picks among root moves with the same best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Uniformly at random among the tied moves.
    #[default]
    Random,
    /// The lowest tied position.
    First,
}

/// Search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seed for the tie-break RNG.
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,

    /// Tie-break policy installed by `MinimaxSearch::new`.
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
