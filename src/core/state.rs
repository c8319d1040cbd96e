//! Game state: board, turn, outcome and undo history.
//!
//! `GameState` is the explicit state object callers hold between moves.
//! It drives the pure rules in [`crate::rules`] and keeps the pieces they
//! leave to the caller: whose turn it is and what can be undone.
//!
//! ## Lifecycle
//!
//! ```text
//! Ongoing --play--> Ongoing --play--> Win | Draw (absorbing)
//!    ^                 |
//!    +------undo-------+
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::Board;
use super::config::GameConfig;
use super::history::{MoveHistory, MoveRecord};
use super::mark::Mark;
use crate::error::GameError;
use crate::rules::{self, Outcome};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    history: MoveHistory,
    starting_mark: Mark,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a game with the default config (O moves first).
    #[must_use]
    pub fn new() -> Self {
        Self::fresh(GameConfig::default().starting_mark)
    }

    /// Create a game from a config.
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::fresh(config.starting_mark))
    }

    fn fresh(starting_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            turn: starting_mark,
            outcome: Outcome::Ongoing,
            history: MoveHistory::new(),
            starting_mark,
        }
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the mark whose turn it is.
    ///
    /// After a terminal outcome this is the mark that made the last move.
    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Get the current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Get the winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Get the winning line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.outcome.winning_line()
    }

    /// Get the undo history.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Get the latest move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// Number of moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Get the mark that moves first after a reset.
    #[must_use]
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Play the current turn's mark at `position`.
    ///
    /// On success the move is recorded, the board re-evaluated and, while the
    /// game goes on, the turn passes to the opponent. On failure nothing
    /// changes.
    pub fn play(&mut self, position: usize) -> Result<Outcome, GameError> {
        let mark = self.turn;
        let board = rules::apply_move(&self.board, position, mark).map_err(|error| {
            debug!(position, %mark, %error, "move rejected");
            error
        })?;

        self.board = board;
        self.history.push(MoveRecord::new(position, mark));
        self.outcome = rules::evaluate(&self.board);

        if !self.outcome.is_terminal() {
            self.turn = mark.opponent();
        }

        debug!(position, %mark, outcome = ?self.outcome, "move applied");
        Ok(self.outcome)
    }

    /// Undo the latest move, restoring its cell and whose turn it was.
    ///
    /// Only allowed while the game is still in progress.
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let record = self.history.last().copied().ok_or(GameError::EmptyHistory)?;
        let (board, turn) = rules::undo(&mut self.history, &self.board)?;

        self.board = board;
        self.turn = turn;
        self.outcome = Outcome::Ongoing;

        debug!(position = record.position, mark = %record.mark, "move undone");
        Ok(record)
    }

    /// Give the turn to the opponent without moving.
    ///
    /// Used when a player runs out of time. The board and history are left
    /// alone, so a later undo still restores the turn recorded with the move.
    pub fn pass_turn(&mut self) -> Result<Mark, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let skipped = self.turn;
        self.turn = skipped.opponent();
        debug!(%skipped, turn = %self.turn, "turn passed");
        Ok(self.turn)
    }

    /// Start over: empty board, starting mark to move, no history.
    pub fn reset(&mut self) {
        *self = Self::fresh(self.starting_mark);
        debug!(turn = %self.turn, "game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: &mut GameState, positions: &[usize]) {
        for &position in positions {
            state.play(position).unwrap();
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Mark::O);
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert!(state.board().is_empty());
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_with_config() {
        let config = GameConfig::default().with_starting_mark(Mark::X);
        let state = GameState::with_config(&config).unwrap();
        assert_eq!(state.turn(), Mark::X);

        let invalid = GameConfig::default().with_starting_mark(Mark::Empty);
        assert_eq!(GameState::with_config(&invalid), Err(GameError::EmptyMark));
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut state = GameState::new();
        state.play(4).unwrap();
        assert_eq!(state.board().get(4), Some(Mark::O));
        assert_eq!(state.turn(), Mark::X);

        state.play(0).unwrap();
        assert_eq!(state.board().get(0), Some(Mark::X));
        assert_eq!(state.turn(), Mark::O);
        assert_eq!(state.move_count(), 2);
        assert_eq!(state.last_move(), Some(MoveRecord::new(0, Mark::X)));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut state = GameState::new();
        state.play(4).unwrap();
        let before = state.clone();

        assert_eq!(
            state.play(4),
            Err(GameError::Occupied {
                position: 4,
                mark: Mark::O
            })
        );
        assert_eq!(state.play(11), Err(GameError::OutOfRange { position: 11 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_is_absorbing() {
        let mut state = GameState::new();
        // O: 0, 1, 2 / X: 3, 4
        play_all(&mut state, &[0, 3, 1, 4, 2]);

        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Mark::O));
        assert_eq!(state.winning_line(), Some([0, 1, 2]));
        assert_eq!(state.turn(), Mark::O);

        assert_eq!(state.play(5), Err(GameError::GameOver));
        assert_eq!(state.undo(), Err(GameError::GameOver));
        assert_eq!(state.pass_turn(), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::new();
        // Fills X O X / X O O / O X O with O moving first.
        play_all(&mut state, &[1, 0, 4, 2, 5, 3, 6, 7, 8]);
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_undo_round_trip() {
        let mut state = GameState::new();
        play_all(&mut state, &[4, 0]);
        let before = state.clone();

        state.play(8).unwrap();
        let record = state.undo().unwrap();

        assert_eq!(record, MoveRecord::new(8, Mark::O));
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut state = GameState::new();
        assert_eq!(state.undo(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_pass_turn_then_undo_restores_recorded_turn() {
        let mut state = GameState::new();
        state.play(4).unwrap();
        assert_eq!(state.pass_turn(), Ok(Mark::O));
        assert_eq!(state.turn(), Mark::O);

        state.undo().unwrap();
        assert_eq!(state.turn(), Mark::O);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_reset() {
        let config = GameConfig::default().with_starting_mark(Mark::X);
        let mut state = GameState::with_config(&config).unwrap();
        play_all(&mut state, &[0, 3, 1, 4, 2]);

        state.reset();
        assert_eq!(state.turn(), Mark::X);
        assert!(state.board().is_empty());
        assert!(state.history().is_empty());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new();
        play_all(&mut state, &[4, 0, 8]);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
