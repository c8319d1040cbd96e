//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The searching mark is the maximizing side. Terminal positions score
//! `10 - depth` for a win, `depth - 10` for a loss and `0` for a draw, where
//! the root move itself is ply 0. Faster wins and slower losses therefore
//! score higher.
//!
//! Every root move is searched with a full window so the scores of tied root
//! moves are exact; pruning only happens below the root and never changes
//! which moves are tied for best.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Board, Mark, BOARD_SIZE};
use crate::error::GameError;
use crate::rules::{self, Outcome};

use super::config::{SearchConfig, TieBreak};
use super::policy::{FirstTieBreak, TieBreakPolicy, UniformTieBreak};
use super::stats::SearchStats;

/// Score of a win on the root move.
pub const WIN_SCORE: i32 = 10;

/// Minimax score of every cell; `None` for occupied cells.
pub type MoveScores = [Option<i32>; BOARD_SIZE];

/// A recommended move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    /// The chosen position.
    pub position: usize,

    /// The score the searching side is guaranteed with best play.
    pub score: i32,

    /// Every position that reached `score`, ascending. Contains `position`.
    pub candidates: SmallVec<[usize; BOARD_SIZE]>,
}

/// Minimax search context.
///
/// Owns the tie-break policy and the statistics of the last call. The board
/// passed in is never modified; the search explores a private copy and
/// restores each cell after recursing into it.
///
/// ```
/// use rust_ttt::core::{Board, Mark};
/// use rust_ttt::search::{MinimaxSearch, SearchConfig};
///
/// let mut search = MinimaxSearch::new(SearchConfig::default().with_seed(1));
/// let board: Board = "OO./XX./...".parse().unwrap();
///
/// let best = search.best_move(&board, Mark::O).unwrap();
/// assert_eq!(best.position, 2);
/// assert_eq!(best.score, 10);
/// ```
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Picks among equally scored root moves.
    tie_break: Box<dyn TieBreakPolicy>,

    /// Statistics of the last call.
    stats: SearchStats,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl std::fmt::Debug for MinimaxSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimaxSearch")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl MinimaxSearch {
    /// Create a new search, installing the tie-break policy the config names.
    pub fn new(config: SearchConfig) -> Self {
        let tie_break: Box<dyn TieBreakPolicy> = match (config.tie_break, config.seed) {
            (TieBreak::First, _) => Box::new(FirstTieBreak),
            (TieBreak::Random, Some(seed)) => Box::new(UniformTieBreak::seeded(seed)),
            (TieBreak::Random, None) => Box::new(UniformTieBreak::from_entropy()),
        };

        Self {
            config,
            tie_break,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom tie-break policy.
    pub fn with_tie_break<P: TieBreakPolicy + 'static>(mut self, tie_break: P) -> Self {
        self.tie_break = Box::new(tie_break);
        self
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get statistics of the last search call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best move for `mark` on `board`.
    ///
    /// Ties for the best score are broken by the installed policy.
    ///
    /// # Errors
    /// - `EmptyMark` if `mark` is `Empty`
    /// - `NoMoveAvailable` if the board has no empty cell
    /// - `GameOver` if the board is already won
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> Result<BestMove, GameError> {
        let scores = self.score_moves(board, mark)?;

        let score = scores
            .iter()
            .flatten()
            .copied()
            .max()
            .ok_or(GameError::NoMoveAvailable)?;

        let candidates: SmallVec<[usize; BOARD_SIZE]> = scores
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Some(score))
            .map(|(position, _)| position)
            .collect();

        let position = self
            .tie_break
            .choose(&candidates)
            .ok_or(GameError::NoMoveAvailable)?;

        debug!(
            %mark,
            position,
            score,
            candidates = ?candidates.as_slice(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "best move chosen"
        );

        Ok(BestMove {
            position,
            score,
            candidates,
        })
    }

    /// Score every empty cell as a move for `mark`.
    ///
    /// Each score is exact under optimal play from both sides.
    ///
    /// # Errors
    /// Same as [`Self::best_move`].
    pub fn score_moves(&mut self, board: &Board, mark: Mark) -> Result<MoveScores, GameError> {
        if mark.is_empty() {
            return Err(GameError::EmptyMark);
        }
        if board.is_full() {
            return Err(GameError::NoMoveAvailable);
        }
        if rules::evaluate(board).is_terminal() {
            return Err(GameError::GameOver);
        }

        let start = Instant::now();
        self.stats.reset();

        let mut scratch = *board;
        let mut scores: MoveScores = [None; BOARD_SIZE];

        for position in 0..BOARD_SIZE {
            if !scratch.is_empty_at(position) {
                continue;
            }

            scratch.set(position, mark);
            let cutoffs_before = self.stats.cutoffs;
            let score = self.minimax(&mut scratch, mark, 0, false, i32::MIN, i32::MAX);
            scratch.set(position, Mark::Empty);

            trace!(
                position,
                score,
                cutoffs = self.stats.cutoffs - cutoffs_before,
                "root move scored"
            );
            scores[position] = Some(score);
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(scores)
    }

    /// Score `board` from `ai`'s point of view at `depth` plies below the root.
    ///
    /// `board` is mutated during exploration and restored before returning.
    fn minimax(
        &mut self,
        board: &mut Board,
        ai: Mark,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth as u8);

        match rules::evaluate(board) {
            Outcome::Win { mark, .. } => {
                self.stats.leaves += 1;
                return if mark == ai {
                    WIN_SCORE - depth
                } else {
                    depth - WIN_SCORE
                };
            }
            Outcome::Draw => {
                self.stats.leaves += 1;
                return 0;
            }
            Outcome::Ongoing => {}
        }

        let mover = if maximizing { ai } else { ai.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for position in 0..BOARD_SIZE {
            if !board.is_empty_at(position) {
                continue;
            }

            board.set(position, mover);
            let value = self.minimax(board, ai, depth + 1, !maximizing, alpha, beta);
            board.set(position, Mark::Empty);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
