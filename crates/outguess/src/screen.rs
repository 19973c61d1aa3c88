//! Screen text for the terminal game: banners, score bar, and table view.
//!
//! Everything here builds plain strings; the loop in [`crate::run`] decides
//! where they go. Layouts follow the original game so veterans see the same
//! screens.

use outguess_core::{GameSession, GameStatus, Move, PointTo, RowIndex, TurnReport};

/// The welcome banner with the key bindings.
pub fn instructions() -> String {
    "Welcome to the 0/1 guessing game!\n\
     \n\
     Enter 0 or 1, trying to outsmart the computer, which is going to\n\
     attempt to forecast your guesses.  On each move the score indicator\n\
     moves to the right if the computer guesses correctly, and moves\n\
     to the left if the computer does not.\n\
     \u{20}   Enter 't' to toggle displaying the data table.\n\
     \u{20}   Enter 'r' to reset the board.\n\
     \u{20}   Enter 'x' to exit.\n\
     Good luck, you'll need it!\n"
        .to_string()
}

/// The ASCII score bar with a caret under the current score.
///
/// The computer's end is on the left, the human's on the right; the caret
/// sits `score` cells from the center. `lead` cells in either direction is
/// the edge of the bar.
pub fn score_bar(score: i32, lead: i32) -> String {
    let span = lead.max(1) as usize;
    let width = 2 * span + 1;

    let mut text = String::new();
    text.push('\n');
    text.push_str("Computer");
    let pad = width.saturating_sub("Computer".len() + "Human".len()).max(1);
    text.push_str(&" ".repeat(pad));
    text.push_str("Human\n");

    text.push('x');
    text.push_str(&"-".repeat(span - 1));
    text.push('x');
    text.push_str(&"+".repeat(span - 1));
    text.push_str("x\n");

    let caret = (score + lead).clamp(0, 2 * lead) as usize;
    text.push_str(&" ".repeat(caret));
    text.push_str("^\n");
    text
}

/// The frequency-table view: one row per 3-bit context, the two counters
/// right-aligned, then the previous three moves and the current forecast.
pub fn table_view(session: &GameSession, forecast: Move) -> String {
    let mut text = String::new();
    text.push_str("         0   1\n");
    text.push_str("       --- ---\n");
    for row in RowIndex::all() {
        let [zeros, ones] = session.table().counts(row);
        text.push_str(&format!("   {row}{zeros:>4}{ones:>4}\n"));
    }
    text.push_str(&format!(
        "   Previous three: {}.  Forecast: {}\n",
        session.window(),
        forecast
    ));
    text
}

/// The messages that follow a played move: who got the point, flavor lines
/// at the halfway score, and the win screen at the target lead.
pub fn turn_summary(report: &TurnReport, lead: i32) -> String {
    let mut text = String::new();
    match report.point_to() {
        PointTo::Computer => text.push_str("   Computer gets a point.\n"),
        PointTo::Human => text.push_str("   Human gets a point.\n"),
    }

    match report.status() {
        GameStatus::HumanWin => {
            text.push_str(&score_bar(*report.score(), lead));
            text.push_str("*** Human wins! ***\n");
        }
        GameStatus::ComputerWin => {
            text.push_str(&score_bar(*report.score(), lead));
            text.push_str("*** Silicon rules! ***\n");
        }
        GameStatus::InProgress => {
            let halfway = lead / 2;
            if halfway > 0 && *report.score() == -halfway {
                text.push_str(">>> You're going to lose! <<<\n");
            } else if halfway > 0 && *report.score() == halfway {
                text.push_str("<<< Humans are the best! >>>\n");
            }
        }
    }
    text
}
