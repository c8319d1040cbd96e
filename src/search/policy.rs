//! Tie-break policies for choosing among equally scored moves.
//!
//! The search hands every root move that reached the best score to a
//! `TieBreakPolicy`. The default draws uniformly at random so the computer
//! player does not repeat itself; tests install a seeded RNG or
//! `FirstTieBreak` to make the choice deterministic.

use crate::core::GameRng;

/// Policy for picking one move out of a tied set.
pub trait TieBreakPolicy: Send + Sync {
    /// Pick one of `candidates` (ascending positions).
    ///
    /// Returns `None` only when `candidates` is empty.
    fn choose(&mut self, candidates: &[usize]) -> Option<usize>;
}

/// Uniform random choice among tied moves.
#[derive(Clone, Debug)]
pub struct UniformTieBreak {
    rng: GameRng,
}

impl UniformTieBreak {
    /// Create a policy drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a policy with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create a policy seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Get the underlying RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl TieBreakPolicy for UniformTieBreak {
    fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        self.rng.choose(candidates).copied()
    }
}

/// Always the lowest tied position.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTieBreak;

impl TieBreakPolicy for FirstTieBreak {
    fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.first().copied()
    }
}
