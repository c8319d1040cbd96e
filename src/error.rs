//! Error type shared by the rules engine, game state and search.
//!
//! Every variant is recoverable: the operation that returned it left the
//! board, turn and history exactly as they were.

use crate::core::Mark;

/// Why an operation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The position is not on the board.
    #[error("position {position} is out of range 0..=8")]
    OutOfRange { position: usize },

    /// The target cell already holds a mark.
    #[error("position {position} is already occupied by {mark}")]
    Occupied { position: usize, mark: Mark },

    /// `Mark::Empty` was given where a player mark is required.
    #[error("an empty mark cannot move")]
    EmptyMark,

    /// The game has already been won or drawn.
    #[error("the game is already over")]
    GameOver,

    /// Undo was requested with no moves recorded.
    #[error("there is no move to undo")]
    EmptyHistory,

    /// The latest recorded move does not match the board it is undone on.
    #[error("cannot undo {expected} at position {position}: the cell holds {found}")]
    HistoryMismatch {
        position: usize,
        expected: Mark,
        found: Mark,
    },

    /// Search was requested on a board without an empty cell.
    #[error("no move is available on a full board")]
    NoMoveAvailable,
}

impl GameError {
    /// Check if this error rejects a move request.
    #[must_use]
    pub const fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfRange { .. }
                | GameError::Occupied { .. }
                | GameError::EmptyMark
                | GameError::GameOver
        )
    }
}
