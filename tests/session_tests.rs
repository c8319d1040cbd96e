//! Session integration tests: full games, score keeping and modes.

use rust_ttt::core::{GameConfig, Mark};
use rust_ttt::error::GameError;
use rust_ttt::rules::{legal_moves, Outcome};
use rust_ttt::search::{SearchConfig, TieBreak};
use rust_ttt::session::{PlayMode, ScoreTally, Session, SessionConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn session(mode: PlayMode, seed: u64) -> Session {
    init_tracing();
    let config = SessionConfig::default()
        .with_mode(mode)
        .with_search(SearchConfig::default().with_seed(seed));
    Session::new(config).unwrap()
}

/// Play the lowest empty cell until the game ends.
fn play_out(session: &mut Session) -> Outcome {
    while !session.state().is_terminal() {
        let position = legal_moves(session.state().board())[0];
        session.play(position).unwrap();
    }
    session.state().outcome()
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_two_player_game_to_win() {
    let mut session = session(PlayMode::TwoPlayer, 1);

    for position in [0, 3, 1, 4] {
        let report = session.play(position).unwrap();
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert!(report.computer_move.is_none());
    }

    let report = session.play(2).unwrap();
    assert!(report.outcome.is_winner(Mark::O));
    assert_eq!(report.outcome.winning_line(), Some([0, 1, 2]));
    assert_eq!(session.scores().wins(Mark::O), 1);
    assert_eq!(session.play(5), Err(GameError::GameOver));
}

#[test]
fn test_computer_never_loses() {
    for seed in 0..20 {
        let mut session = session(PlayMode::default(), seed);
        let outcome = play_out(&mut session);

        assert!(outcome.is_terminal());
        assert!(!outcome.is_winner(Mark::O), "seed {seed}: {outcome:?}");
    }
}

#[test]
fn test_computer_vs_computer_draws() {
    let mut session = session(PlayMode::TwoPlayer, 3);
    while !session.state().is_terminal() {
        session.computer_move().unwrap();
    }

    assert_eq!(session.state().outcome(), Outcome::Draw);
    assert_eq!(session.state().move_count(), 9);
    assert_eq!(session.computer_move(), Err(GameError::GameOver));
}

#[test]
fn test_illegal_move_is_reported() {
    let mut session = session(PlayMode::default(), 4);
    let report = session.play(4).unwrap();
    let reply = report.computer_move.unwrap().position;

    assert_eq!(
        session.play(reply),
        Err(GameError::Occupied {
            position: reply,
            mark: Mark::X
        })
    );
    assert_eq!(session.play(42), Err(GameError::OutOfRange { position: 42 }));
    assert_eq!(session.state().move_count(), 2);
}

// =============================================================================
// Scores
// =============================================================================

#[test]
fn test_scores_accumulate_across_games() {
    let mut session = session(PlayMode::default(), 5);

    for _ in 0..3 {
        play_out(&mut session);
        session.new_game().unwrap();
    }

    let scores = *session.scores();
    assert_eq!(scores.total(), 3);
    assert_eq!(scores.o, 0);
    assert!(session.state().board().is_empty());
}

#[test]
fn test_reset_clears_scores() {
    let mut session = session(PlayMode::default(), 6);
    play_out(&mut session);
    assert_eq!(session.scores().total(), 1);

    session.reset().unwrap();
    assert_eq!(*session.scores(), ScoreTally::new());
    assert_eq!(session.state().move_count(), 0);
}

#[test]
fn test_scores_persist_as_json() {
    let mut session = session(PlayMode::TwoPlayer, 7);
    // X O X / X O O / O X O, O moving first.
    for position in [1, 0, 4, 2, 5, 3, 6, 7, 8] {
        session.play(position).unwrap();
    }
    assert_eq!(session.state().outcome(), Outcome::Draw);

    let json = serde_json::to_string(session.scores()).unwrap();
    assert_eq!(json, r#"{"X":0,"O":0,"D":1}"#);
}

// =============================================================================
// Modes, Undo and Timeouts
// =============================================================================

#[test]
fn test_set_mode_starts_new_game_and_keeps_scores() {
    let mut session = session(PlayMode::default(), 8);
    play_out(&mut session);

    let opening = session
        .set_mode(PlayMode::VsComputer { computer: Mark::O })
        .unwrap();

    assert!(opening.is_some());
    assert_eq!(session.state().move_count(), 1);
    assert_eq!(session.state().turn(), Mark::X);
    assert_eq!(session.scores().total(), 1);

    assert_eq!(
        session.set_mode(PlayMode::VsComputer {
            computer: Mark::Empty
        }),
        Err(GameError::EmptyMark)
    );
}

#[test]
fn test_starting_mark_from_config() {
    init_tracing();
    let config = SessionConfig::default()
        .with_game(GameConfig::default().with_starting_mark(Mark::X))
        .with_search(SearchConfig::default().with_tie_break(TieBreak::First));
    let session = Session::new(config).unwrap();

    // X is the computer by default, so it has already opened.
    assert_eq!(session.state().move_count(), 1);
    assert_eq!(session.state().turn(), Mark::O);
}

#[test]
fn test_undo_against_computer() {
    let mut session = session(PlayMode::default(), 9);
    session.play(0).unwrap();
    let next = legal_moves(session.state().board())[0];
    session.play(next).unwrap();
    assert_eq!(session.state().move_count(), 4);

    let undone = session.undo().unwrap();
    assert_eq!(undone.len(), 2);
    assert_eq!(undone[0].mark, Mark::X);
    assert_eq!(undone[1].mark, Mark::O);
    assert_eq!(session.state().move_count(), 2);
    assert_eq!(session.state().turn(), Mark::O);
}

#[test]
fn test_undo_refused_after_game_over() {
    let mut session = session(PlayMode::default(), 10);
    play_out(&mut session);
    assert_eq!(session.undo(), Err(GameError::GameOver));
}

#[test]
fn test_timeout_passes_turn_to_computer() {
    let mut session = session(PlayMode::default(), 11);
    let report = session.pass_turn().unwrap();

    let reply = report.computer_move.unwrap();
    assert_eq!(session.state().board().get(reply.position), Some(Mark::X));
    assert_eq!(session.state().turn(), Mark::O);
}

#[test]
fn test_hint_matches_search_quality() {
    let mut session = session(PlayMode::TwoPlayer, 12);
    for position in [0, 3, 1] {
        session.play(position).unwrap();
    }

    // X to move must block row 0.
    let hint = session.hint().unwrap();
    assert_eq!(hint.position, 2);
    assert_eq!(session.state().move_count(), 3);
}

#[test]
fn test_undo_after_timeout_reply() {
    let mut session = session(PlayMode::default(), 13);
    session.play(0).unwrap();
    session.pass_turn().unwrap();

    let undone = session.undo().unwrap();
    assert_eq!(undone.len(), 3);
    assert_eq!(undone[2].position, 0);
    assert_eq!(session.state().turn(), Mark::O);
    assert!(session.state().board().is_empty());

    // Playing again places the person's mark.
    let report = session.play(4).unwrap();
    assert_eq!(report.player_move.map(|record| record.mark), Some(Mark::O));
}
