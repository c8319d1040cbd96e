//! Core game types: marks, board, history, configuration, RNG, state.
//!
//! These are plain values with no I/O. Callers hold a `GameState` (or a bare
//! `Board` for the pure rules) and pass it to each operation.

pub mod mark;
pub mod board;
pub mod history;
pub mod config;
pub mod rng;
pub mod state;

pub use mark::{InvalidMarkChar, Mark};
pub use board::{Board, InvalidBoard, LineKind, WinPattern, BOARD_SIZE, BOARD_WIDTH, WIN_PATTERNS};
pub use history::{MoveHistory, MoveRecord};
pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
