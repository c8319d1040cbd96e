//! Move history for undo.
//!
//! Every accepted move pushes a `MoveRecord`; undo pops the latest one and
//! reverses it. The stack length always equals the number of moves applied
//! since the last reset.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// A recorded move with what is needed to reverse it.
///
/// Moves are only made by the side whose turn it is, so `mark` is also the
/// turn owner that undo restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The cell that was filled.
    pub position: usize,

    /// The mark that was placed.
    pub mark: Mark,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(position: usize, mark: Mark) -> Self {
        Self { position, mark }
    }
}

/// Undo stack of applied moves, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted move.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Remove and return the latest move.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// Get the latest move without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every move.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate over moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }
}
