//! Tests for the game session: scoring, termination, reset, and the
//! turn sequence from the original game.

use outguess_core::{
    FrequencyTable, GameSession, GameStatus, Move, PointTo, RowIndex,
};

fn row(index: usize) -> RowIndex {
    RowIndex::all().nth(index).expect("index in 0..8")
}

#[test]
fn test_first_four_turns_of_alternating_play() {
    let mut session = GameSession::new();

    // Turns 1-3 are warm-up: the table must stay untouched.
    session.play(Move::Zero);
    session.play(Move::One);
    session.play(Move::Zero);
    assert_eq!(session.table(), &FrequencyTable::new());

    // Before turn 4 the window is (0, 1, 0), row 2.
    assert_eq!(session.window().row_index().as_usize(), 2);

    let report = session.play(Move::One);
    assert_eq!(*report.turn(), 4);
    assert_eq!(session.table().counts(row(2)), [0, 1]);
    assert_eq!(session.window().moves(), [Move::One, Move::Zero, Move::One]);
}

#[test]
fn test_forecast_is_stable_between_moves() {
    let session = GameSession::new();
    let first = session.forecast();
    assert_eq!(session.forecast(), first);

    // Fresh session: all-zero table, latest move 0, so the tie-break says 1.
    assert_eq!(first, Move::One);
}

#[test]
fn test_correct_forecast_scores_for_computer() {
    let mut session = GameSession::new();

    // Fresh session forecasts 1; play it.
    let report = session.play(Move::One);
    assert_eq!(*report.forecast(), Move::One);
    assert_eq!(*report.point_to(), PointTo::Computer);
    assert_eq!(*report.score(), -1);
    assert_eq!(*report.status(), GameStatus::InProgress);
}

#[test]
fn test_wrong_forecast_scores_for_human() {
    let mut session = GameSession::new();

    // Fresh session forecasts 1; defy it.
    let report = session.play(Move::Zero);
    assert_eq!(*report.point_to(), PointTo::Human);
    assert_eq!(*report.score(), 1);
}

#[test]
fn test_computer_wins_at_target_lead() {
    let mut session = GameSession::with_target_lead(4);

    let mut last = None;
    for _ in 0..4 {
        // Always play what the computer expects.
        let forecast = session.forecast();
        last = Some(session.play(forecast));
    }

    let report = last.expect("played four turns");
    assert_eq!(*report.score(), -4);
    assert_eq!(*report.status(), GameStatus::ComputerWin);
    assert_eq!(session.status(), GameStatus::ComputerWin);
}

#[test]
fn test_human_wins_at_target_lead() {
    let mut session = GameSession::with_target_lead(4);

    for _ in 0..4 {
        let forecast = session.forecast();
        session.play(forecast.opposite());
    }

    assert_eq!(*session.score(), 4);
    assert_eq!(session.status(), GameStatus::HumanWin);
}

#[test]
fn test_reset_replaces_table_and_restarts_turns() {
    let mut session = GameSession::new();
    session.play(Move::One);
    session.play(Move::One);
    session.play(Move::Zero);
    session.play(Move::One);
    let score_before = *session.score();

    let values: Vec<i64> = (1..=16).collect();
    let seed = FrequencyTable::try_from_values(&values).expect("valid seed");
    session.reset(seed.clone());

    assert_eq!(session.table(), &seed);
    assert_eq!(session.window().row_index().as_usize(), 0);
    assert_eq!(*session.turn(), 1);
    // Reset reseeds the predictor but keeps the score.
    assert_eq!(*session.score(), score_before);
}

#[test]
fn test_warm_up_applies_again_after_reset() {
    let mut session = GameSession::new();
    for _ in 0..6 {
        session.play(Move::One);
    }

    session.reset(FrequencyTable::new());
    session.play(Move::One);
    session.play(Move::One);
    session.play(Move::One);

    // Three post-reset turns are warm-up again: nothing recorded.
    assert_eq!(session.table(), &FrequencyTable::new());
}

#[test]
fn test_toggle_table_flips_flag() {
    let mut session = GameSession::new();
    assert!(!session.table_visible());
    assert!(session.toggle_table());
    assert!(*session.table_visible());
    assert!(!session.toggle_table());
}

#[test]
fn test_predictor_learns_a_repeated_pattern() {
    let mut session = GameSession::with_target_lead(100);

    // A human stuck on a period-2 pattern: 0 1 0 1 0 1 ...
    let mut correct = 0;
    let mut total = 0;
    for turn in 0..40 {
        let actual = if turn % 2 == 0 { Move::Zero } else { Move::One };
        let report = session.play(actual);
        if turn >= 10 {
            total += 1;
            if *report.point_to() == PointTo::Computer {
                correct += 1;
            }
        }
    }

    // Once the table has seen the pattern, every forecast lands.
    assert_eq!(correct, total);
}
