//! A run of games against another person or the computer.
//!
//! `Session` wires the game state, the search and the score tally together
//! the way a front end drives them: the caller reports which cell a person
//! picked, and the session answers with the computer's reply and the
//! outcome. Rendering, sounds, timers and storage stay with the caller.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{GameState, MoveRecord};
use crate::error::GameError;
use crate::rules::Outcome;
use crate::search::{BestMove, MinimaxSearch};

use super::config::{PlayMode, SessionConfig};
use super::tally::ScoreTally;

/// What happened in response to one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The move the caller asked for, if any.
    pub player_move: Option<MoveRecord>,

    /// The computer's reply, if it moved.
    pub computer_move: Option<BestMove>,

    /// The outcome after both moves.
    pub outcome: Outcome,
}

/// Game state, computer player and running score.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    state: GameState,
    search: MinimaxSearch,
    scores: ScoreTally,
}

impl Session {
    /// Create a session. The computer opens if it moves first.
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut session = Self {
            state: GameState::with_config(&config.game)?,
            search: MinimaxSearch::new(config.search.clone()),
            scores: ScoreTally::new(),
            config,
        };
        session.respond()?;
        Ok(session)
    }

    /// Get the current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the running score.
    #[must_use]
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Get who plays which mark.
    #[must_use]
    pub fn mode(&self) -> PlayMode {
        self.config.mode
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the computer player.
    #[must_use]
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }

    /// Check if the computer is due to move.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        !self.state.is_terminal() && self.config.mode.computer() == Some(self.state.turn())
    }

    /// Play the current turn's mark at `position`, then let the computer
    /// reply if it is its turn.
    pub fn play(&mut self, position: usize) -> Result<TurnReport, GameError> {
        let outcome = self.state.play(position)?;
        let player_move = self.state.last_move();
        self.finish_if_over(outcome);

        let computer_move = self.respond()?;
        Ok(TurnReport {
            player_move,
            computer_move,
            outcome: self.state.outcome(),
        })
    }

    /// Let the search play the current turn's mark.
    ///
    /// Works in either mode; in `TwoPlayer` it plays for whoever is to move.
    pub fn computer_move(&mut self) -> Result<BestMove, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }

        let mark = self.state.turn();
        let best = self.search.best_move(self.state.board(), mark)?;
        let outcome = self.state.play(best.position)?;
        debug!(%mark, position = best.position, score = best.score, "computer moved");
        self.finish_if_over(outcome);
        Ok(best)
    }

    /// Recommend a move for the current turn without playing it.
    pub fn hint(&mut self) -> Result<BestMove, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.search.best_move(self.state.board(), self.state.turn())
    }

    /// Hand the turn over without moving, as when a move timer runs out.
    ///
    /// The computer replies if the turn passes to it.
    pub fn pass_turn(&mut self) -> Result<TurnReport, GameError> {
        self.state.pass_turn()?;
        let computer_move = self.respond()?;
        Ok(TurnReport {
            player_move: None,
            computer_move,
            outcome: self.state.outcome(),
        })
    }

    /// Take back the latest move.
    ///
    /// Against the computer this keeps taking back the computer's replies
    /// and then the person's latest move, so it is the person's turn again.
    /// Refused with `EmptyHistory` if only computer moves remain. Returns the
    /// undone moves, latest first.
    pub fn undo(&mut self) -> Result<SmallVec<[MoveRecord; 2]>, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if let Some(computer) = self.config.mode.computer() {
            if self.state.history().iter().all(|record| record.mark == computer) {
                return Err(GameError::EmptyHistory);
            }
        }

        let mut undone = SmallVec::new();
        undone.push(self.state.undo()?);

        while self.is_computer_turn() && !self.state.history().is_empty() {
            undone.push(self.state.undo()?);
        }

        debug!(count = undone.len(), turn = %self.state.turn(), "undo");
        Ok(undone)
    }

    /// Start the next game, keeping the score.
    ///
    /// Returns the computer's opening move if it moves first.
    pub fn new_game(&mut self) -> Result<Option<BestMove>, GameError> {
        self.state.reset();
        self.respond()
    }

    /// Start over, clearing the score as well.
    pub fn reset(&mut self) -> Result<Option<BestMove>, GameError> {
        self.scores.reset();
        self.new_game()
    }

    /// Switch who plays which mark and start a new game, keeping the score.
    pub fn set_mode(&mut self, mode: PlayMode) -> Result<Option<BestMove>, GameError> {
        mode.validate()?;
        self.config.mode = mode;
        debug!(?mode, "mode changed");
        self.new_game()
    }

    /// Let the computer move if it is due.
    fn respond(&mut self) -> Result<Option<BestMove>, GameError> {
        if self.is_computer_turn() {
            self.computer_move().map(Some)
        } else {
            Ok(None)
        }
    }

    fn finish_if_over(&mut self, outcome: Outcome) {
        if !outcome.is_terminal() {
            return;
        }

        self.scores.record(&outcome);
        match outcome.winner() {
            Some(winner) => info!(
                %winner,
                line = ?outcome.winning_line(),
                x = self.scores.x,
                o = self.scores.o,
                draws = self.scores.draws,
                "game won"
            ),
            None => info!(
                x = self.scores.x,
                o = self.scores.o,
                draws = self.scores.draws,
                "game drawn"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::search::{SearchConfig, TieBreak};

    fn deterministic(mode: PlayMode) -> Session {
        let config = SessionConfig::default()
            .with_mode(mode)
            .with_search(SearchConfig::default().with_tie_break(TieBreak::First));
        Session::new(config).unwrap()
    }

    #[test]
    fn test_computer_replies() {
        let mut session = deterministic(PlayMode::default());
        let report = session.play(4).unwrap();

        assert_eq!(report.player_move, Some(MoveRecord::new(4, Mark::O)));
        let reply = report.computer_move.unwrap();
        assert_eq!(session.state().board().get(reply.position), Some(Mark::X));
        assert_eq!(session.state().turn(), Mark::O);
        assert_eq!(session.state().move_count(), 2);
    }

    #[test]
    fn test_two_player_has_no_reply() {
        let mut session = deterministic(PlayMode::TwoPlayer);
        let report = session.play(4).unwrap();
        assert!(report.computer_move.is_none());
        assert_eq!(session.state().turn(), Mark::X);
    }

    #[test]
    fn test_computer_opens_when_first() {
        let config = SessionConfig::default()
            .with_mode(PlayMode::VsComputer { computer: Mark::O })
            .with_search(SearchConfig::default().with_tie_break(TieBreak::First));
        let session = Session::new(config).unwrap();

        assert_eq!(session.state().move_count(), 1);
        assert_eq!(session.state().turn(), Mark::X);
    }

    #[test]
    fn test_undo_returns_to_human_turn() {
        let mut session = deterministic(PlayMode::default());
        session.play(4).unwrap();

        let undone = session.undo().unwrap();
        assert_eq!(undone.len(), 2);
        assert_eq!(undone[1].position, 4);
        assert!(session.state().board().is_empty());
        assert_eq!(session.state().turn(), Mark::O);
    }

    #[test]
    fn test_undo_single_move_two_player() {
        let mut session = deterministic(PlayMode::TwoPlayer);
        session.play(4).unwrap();
        session.play(0).unwrap();

        let undone = session.undo().unwrap();
        assert_eq!(undone.len(), 1);
        assert_eq!(undone[0].position, 0);
        assert_eq!(session.state().turn(), Mark::X);
    }

    #[test]
    fn test_undo_after_pass_returns_to_human_turn() {
        let mut session = deterministic(PlayMode::default());
        session.play(4).unwrap();
        session.pass_turn().unwrap();
        assert_eq!(session.state().move_count(), 3);

        let undone = session.undo().unwrap();
        let marks: Vec<Mark> = undone.iter().map(|record| record.mark).collect();
        assert_eq!(marks, vec![Mark::X, Mark::X, Mark::O]);
        assert!(session.state().board().is_empty());
        assert_eq!(session.state().turn(), Mark::O);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_undo_refused_when_only_computer_moved() {
        let config = SessionConfig::default()
            .with_mode(PlayMode::VsComputer { computer: Mark::O })
            .with_search(SearchConfig::default().with_tie_break(TieBreak::First));
        let mut session = Session::new(config).unwrap();
        let before = session.state().clone();

        assert_eq!(session.undo(), Err(GameError::EmptyHistory));
        assert_eq!(*session.state(), before);
        assert_eq!(session.state().turn(), Mark::X);
    }

    #[test]
    fn test_pass_turn_lets_computer_move() {
        let mut session = deterministic(PlayMode::default());
        let report = session.pass_turn().unwrap();

        assert!(report.player_move.is_none());
        assert!(report.computer_move.is_some());
        assert_eq!(session.state().turn(), Mark::O);
        assert_eq!(session.state().move_count(), 1);
    }

    #[test]
    fn test_hint_does_not_play() {
        let mut session = deterministic(PlayMode::TwoPlayer);
        let hint = session.hint().unwrap();
        assert!(session.state().board().is_empty_at(hint.position));
        assert_eq!(session.state().move_count(), 0);
    }
}
