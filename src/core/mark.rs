//! Cell marks.
//!
//! A `Mark` is what occupies a board cell: nothing, an X or an O.
//! The same type names the side to move, in which case it is never `Empty`.

use serde::{Deserialize, Serialize};

/// Failed to parse a [`Mark`] from a [`char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid tic-tac-toe mark")]
pub struct InvalidMarkChar(pub char);

/// The content of a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// The two marks that can take a turn, X first.
    pub const PLAYERS: [Mark; 2] = [Mark::X, Mark::O];

    /// Get the opposing mark.
    ///
    /// `Empty` has no opponent and maps to itself.
    ///
    /// ```
    /// use rust_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Check if this is `Empty`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Check if this is a player mark (X or O).
    #[must_use]
    pub const fn is_player(self) -> bool {
        !self.is_empty()
    }

    /// Parse a mark from a single character.
    ///
    /// `x`/`X` and `o`/`O` are the player marks.
    /// `.`, `-`, `_` and space are accepted for an empty cell.
    pub fn from_char(c: char) -> Result<Self, InvalidMarkChar> {
        match c {
            'x' | 'X' => Ok(Mark::X),
            'o' | 'O' => Ok(Mark::O),
            '.' | '-' | '_' | ' ' => Ok(Mark::Empty),
            c => Err(InvalidMarkChar(c)),
        }
    }

    /// The character used when rendering a board.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
            Mark::Empty => write!(f, "empty"),
        }
    }
}

impl std::str::FromStr for Mark {
    type Err = InvalidMarkChar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            (None, _) => Ok(Mark::Empty),
            (Some(c), Some(_)) => Err(InvalidMarkChar(c)),
        }
    }
}
