//! Scripted end-to-end games over in-memory handles.

use outguess::{Cli, run};
use outguess_core::GameStatus;

fn cli(lead: i32, table: bool) -> Cli {
    Cli { table, lead }
}

fn play(script: &str, cli: &Cli) -> (GameStatus, String) {
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    let status = run(&mut input, &mut output, cli).expect("game runs");
    (status, String::from_utf8(output).expect("utf8 transcript"))
}

#[test]
fn test_exit_command_leaves_game_in_progress() {
    let (status, transcript) = play("x\n", &cli(10, false));

    assert_eq!(status, GameStatus::InProgress);
    assert!(transcript.contains("Welcome to the 0/1 guessing game!"));
    assert!(transcript.contains("x---------x+++++++++x"));
    assert!(transcript.contains("1. Your input: "));
}

#[test]
fn test_computer_win_ends_the_game() {
    // Always play what the tie-break forecasts: 1, 0, 1 from a fresh session.
    let (status, transcript) = play("1\n0\n1\n", &cli(3, false));

    assert_eq!(status, GameStatus::ComputerWin);
    assert!(transcript.contains("   Computer gets a point."));
    assert!(transcript.contains("*** Silicon rules! ***"));
    assert!(!transcript.contains("*** Human wins! ***"));
}

#[test]
fn test_human_win_ends_the_game() {
    // Repeating 0 defies the anti-repeat tie-break every time.
    let (status, transcript) = play("0\n0\n0\n", &cli(3, false));

    assert_eq!(status, GameStatus::HumanWin);
    assert!(transcript.contains("   Human gets a point."));
    assert!(transcript.contains("*** Human wins! ***"));
}

#[test]
fn test_toggle_shows_the_table() {
    let (status, transcript) = play("t\nx\n", &cli(10, false));

    assert_eq!(status, GameStatus::InProgress);
    assert!(transcript.contains("Previous three: 000.  Forecast: 1"));
}

#[test]
fn test_table_flag_shows_table_from_the_start() {
    let (_, transcript) = play("x\n", &cli(10, true));
    assert!(transcript.contains("Previous three: 000.  Forecast: 1"));
}

#[test]
fn test_bad_input_reprompts_without_consuming_a_turn() {
    let (status, transcript) = play("q\nx\n", &cli(10, false));

    assert_eq!(status, GameStatus::InProgress);
    assert!(transcript.contains("unrecognized input"));
    assert_eq!(transcript.matches("1. Your input: ").count(), 2);
    assert!(!transcript.contains("2. Your input: "));
}

#[test]
fn test_reset_seeds_the_table() {
    let script = "t\nr\n0 9 0 9 0 9 0 9 0 9 0 9 0 9 0 9\nx\n";
    let (_, transcript) = play(script, &cli(10, false));

    assert!(transcript.contains("Enter 16 values"));
    assert!(transcript.contains("   000   0   9"));
    assert!(transcript.contains("   111   0   9"));
    // Seeded row 000 says 1 is nine times more likely.
    assert!(transcript.contains("Previous three: 000.  Forecast: 1"));
}

#[test]
fn test_rejected_seed_keeps_playing() {
    let script = "r\n1 2 three\nx\n";
    let (status, transcript) = play(script, &cli(10, false));

    assert_eq!(status, GameStatus::InProgress);
    assert!(transcript.contains("table seed values must be integers"));
    assert!(transcript.contains("Your input: "));
}

#[test]
fn test_closed_input_ends_the_game() {
    let (status, _) = play("1\n", &cli(10, false));
    assert_eq!(status, GameStatus::InProgress);
}

#[test]
fn test_halfway_flavor_message() {
    let (status, transcript) = play("0\n0\n", &cli(2, false));

    assert_eq!(status, GameStatus::HumanWin);
    assert!(transcript.contains("<<< Humans are the best! >>>"));
}
