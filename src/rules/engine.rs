//! Tic-tac-toe rules as pure functions over a [`Board`].
//!
//! - `apply_move`: place a mark, refusing illegal moves
//! - `evaluate`: win/draw detection
//! - `undo`: reverse the latest recorded move
//!
//! None of these track whose turn it is; `GameState` does that on top.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Mark, MoveHistory, WinPattern, BOARD_SIZE, WIN_PATTERNS};
use crate::error::GameError;

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    /// `mark` filled every cell of `pattern`.
    Win { mark: Mark, pattern: WinPattern },
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Get the winning mark, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Check if `mark` won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        self.winner() == Some(mark)
    }

    /// Get the three positions of the winning line, if any.
    #[must_use]
    pub const fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { pattern, .. } => Some(pattern.cells),
            _ => None,
        }
    }
}

/// Evaluate a board.
///
/// Patterns are scanned in [`WIN_PATTERNS`] order and the first complete one
/// is reported.
///
/// ```
/// use rust_ttt::core::{Board, Mark};
/// use rust_ttt::rules::{evaluate, Outcome};
///
/// let board: Board = "XXX/OO./...".parse().unwrap();
/// assert_eq!(evaluate(&board).winner(), Some(Mark::X));
/// assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    for pattern in &WIN_PATTERNS {
        if let Some(mark) = board.line_owner(pattern) {
            return Outcome::Win {
                mark,
                pattern: *pattern,
            };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Place `mark` at `position`, returning the new board.
///
/// Fails without touching `board` if the mark is `Empty`, the position is off
/// the board, the game on `board` is already over, or the cell is occupied.
/// Whose turn comes next is the caller's concern.
pub fn apply_move(board: &Board, position: usize, mark: Mark) -> Result<Board, GameError> {
    if mark.is_empty() {
        return Err(GameError::EmptyMark);
    }

    let current = board
        .get(position)
        .ok_or(GameError::OutOfRange { position })?;

    if evaluate(board).is_terminal() {
        return Err(GameError::GameOver);
    }

    if current.is_player() {
        return Err(GameError::Occupied {
            position,
            mark: current,
        });
    }

    let mut next = *board;
    next.set(position, mark);
    Ok(next)
}

/// Reverse the latest move in `history`.
///
/// Returns the board with that cell cleared and the mark whose turn it was
/// before the move. Refused with `GameOver` once `board` is terminal, with
/// `EmptyHistory` when there is nothing to undo and with `HistoryMismatch`
/// when the recorded cell does not hold the recorded mark; `history` is only
/// popped on success.
pub fn undo(history: &mut MoveHistory, board: &Board) -> Result<(Board, Mark), GameError> {
    if evaluate(board).is_terminal() {
        return Err(GameError::GameOver);
    }

    let record = *history.last().ok_or(GameError::EmptyHistory)?;
    let found = board.get(record.position).ok_or(GameError::OutOfRange {
        position: record.position,
    })?;
    if found != record.mark || found.is_empty() {
        return Err(GameError::HistoryMismatch {
            position: record.position,
            expected: record.mark,
            found,
        });
    }

    history.pop();
    let mut previous = *board;
    previous.set(record.position, Mark::Empty);
    Ok((previous, record.mark))
}

/// Get the positions a move can be played at, ascending.
///
/// Empty once the game is over.
#[must_use]
pub fn legal_moves(board: &Board) -> SmallVec<[usize; BOARD_SIZE]> {
    if evaluate(board).is_terminal() {
        return SmallVec::new();
    }
    board.empty_cells().collect()
}
