//! The 3x3 board and its winning lines.
//!
//! Positions are numbered 0-8, row-major:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};

use super::mark::{InvalidMarkChar, Mark};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Number of cells in a row or column.
pub const BOARD_WIDTH: usize = 3;

/// The direction of a winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Three positions that win the game when they hold the same player mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinPattern {
    /// The positions, ascending.
    pub cells: [usize; 3],
    /// The line direction.
    pub kind: LineKind,
}

impl WinPattern {
    const fn new(a: usize, b: usize, c: usize, kind: LineKind) -> Self {
        Self {
            cells: [a, b, c],
            kind,
        }
    }

    /// Check if the pattern covers a position.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.cells.contains(&position)
    }
}

/// All winning lines, in evaluation order: rows, then columns, then diagonals.
///
/// When a board satisfies more than one pattern, the first one listed here
/// is the one reported.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    WinPattern::new(0, 1, 2, LineKind::Row),
    WinPattern::new(3, 4, 5, LineKind::Row),
    WinPattern::new(6, 7, 8, LineKind::Row),
    WinPattern::new(0, 3, 6, LineKind::Column),
    WinPattern::new(1, 4, 7, LineKind::Column),
    WinPattern::new(2, 5, 8, LineKind::Column),
    WinPattern::new(0, 4, 8, LineKind::Diagonal),
    WinPattern::new(2, 4, 6, LineKind::AntiDiagonal),
];

/// Failed to parse a [`Board`] from a string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBoard {
    /// The input did not describe exactly nine cells.
    #[error("a board needs exactly 9 cells, found {0}")]
    WrongLength(usize),

    /// A cell character was not a mark.
    #[error(transparent)]
    InvalidMark(#[from] InvalidMarkChar),
}

/// A 3x3 tic-tac-toe board.
///
/// Every position always holds exactly one [`Mark`]. Boards are small `Copy`
/// values; operations that change a board return a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    /// Create a board from a snapshot of its nine cells.
    #[must_use]
    pub const fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get the mark at a position, or `None` if the position is off the board.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    /// Overwrite a cell without any rule checks.
    ///
    /// # Panics
    /// Panics if `position >= BOARD_SIZE`.
    pub(crate) fn set(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }

    /// Get all cells in position order.
    #[must_use]
    pub const fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate over `(position, mark)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Iterate over the empty positions, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(position, _)| position)
    }

    /// Check if the cell at `position` is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Mark::Empty))
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| mark.is_player())
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|mark| mark.is_empty())
    }

    /// Count the cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Get the mark that fills all three cells of `pattern`, if any.
    ///
    /// A pattern reaching off the board has no owner.
    #[must_use]
    pub fn line_owner(&self, pattern: &WinPattern) -> Option<Mark> {
        let [a, b, c] = pattern.cells;
        let mark = self.get(a)?;
        (mark.is_player() && self.get(b) == Some(mark) && self.get(c) == Some(mark))
            .then_some(mark)
    }
}

impl From<[Mark; BOARD_SIZE]> for Board {
    fn from(cells: [Mark; BOARD_SIZE]) -> Self {
        Self::from_cells(cells)
    }
}

impl std::str::FromStr for Board {
    type Err = InvalidBoard;

    /// Parse nine cell characters, row-major.
    ///
    /// Whitespace, `/` and `|` are separators and are skipped, so
    /// `"OO./XX./..."` and `"OO.XX...."` describe the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; BOARD_SIZE];
        let mut len = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let mark = Mark::from_char(c)?;
            if len < BOARD_SIZE {
                cells[len] = mark;
            }
            len += 1;
        }

        if len != BOARD_SIZE {
            return Err(InvalidBoard::WrongLength(len));
        }

        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for mark in chunk {
                write!(f, "{}", mark.as_char())?;
            }
        }
        Ok(())
    }
}
