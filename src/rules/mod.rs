//! Rules engine: move legality, win/draw detection and undo.
//!
//! The functions here take a board snapshot and return a new one, never
//! mutating their input on failure. `GameState` builds turn tracking and
//! history on top of them.

pub mod engine;

pub use engine::{apply_move, evaluate, legal_moves, undo, Outcome};
