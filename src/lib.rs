//! # rust-ttt
//!
//! A tic-tac-toe rules engine with an unbeatable computer player.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Move application, win detection and undo are pure
//!    functions over a `Board`. Callers own the state between calls.
//!
//! 2. **Refuse, Don't Corrupt**: Illegal requests return a `GameError` and
//!    leave board, turn and history untouched.
//!
//! 3. **Reproducible Search**: The computer plays perfectly; ties between
//!    equally good moves are broken by a seedable RNG.
//!
//! ## Modules
//!
//! - `core`: Marks, board, win patterns, move history, RNG, game state
//! - `rules`: `apply_move`, `evaluate`, `undo`, legal moves
//! - `search`: Alpha-beta minimax with random tie-break
//! - `session`: Play modes, computer replies and the running score
//! - `error`: `GameError`

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Mark, LineKind, WinPattern, WIN_PATTERNS, BOARD_SIZE,
    MoveHistory, MoveRecord,
    GameRng, GameRngState,
    GameConfig, GameState,
};

pub use crate::error::GameError;

pub use crate::rules::{apply_move, evaluate, legal_moves, undo, Outcome};

pub use crate::search::{
    BestMove, MinimaxSearch, SearchConfig, SearchStats, TieBreak,
    TieBreakPolicy, UniformTieBreak, FirstTieBreak,
};

pub use crate::session::{PlayMode, ScoreTally, Session, SessionConfig, TurnReport};
