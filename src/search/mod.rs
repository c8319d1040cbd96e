//! Adversarial search for the computer player.
//!
//! ## Overview
//!
//! Full-depth minimax with alpha-beta pruning over the remaining game tree.
//! The board is at most nine cells, so every search is exhaustive and
//! returns a provably optimal move.
//!
//! - **Depth-aware scoring**: prefer immediate wins, delay forced losses
//! - **Random tie-break**: equally good moves are chosen uniformly at random
//! - **Injectable policy**: seed the RNG or swap the `TieBreakPolicy` in tests
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Mark};
//! use rust_ttt::search::{MinimaxSearch, SearchConfig, TieBreak};
//!
//! let config = SearchConfig::default().with_tie_break(TieBreak::First);
//! let mut search = MinimaxSearch::new(config);
//!
//! // Perfect play from an empty board is a draw.
//! let best = search.best_move(&Board::new(), Mark::X).unwrap();
//! assert_eq!(best.score, 0);
//! ```

pub mod config;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use config::{SearchConfig, TieBreak};
pub use minimax::{BestMove, MinimaxSearch, MoveScores, WIN_SCORE};
pub use policy::{FirstTieBreak, TieBreakPolicy, UniformTieBreak};
pub use stats::SearchStats;
