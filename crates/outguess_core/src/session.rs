//! Game session: the predictor state plus score, turn counter, and display flag.
//!
//! The original program kept score, move number, and the table-display flag as
//! process-wide variables. Here they are fields of one owned session object so
//! the whole game is independently testable and free of hidden state.

use crate::context::ContextWindow;
use crate::moves::Move;
use crate::table::FrequencyTable;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Points of lead that end the game in the original rules.
pub const DEFAULT_TARGET_LEAD: i32 = 10;

/// Whether the game is still going, and who won if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Neither side has reached the target lead.
    #[strum(to_string = "in progress")]
    InProgress,
    /// The human reached the target lead.
    #[strum(to_string = "human wins")]
    HumanWin,
    /// The computer reached the target lead.
    #[strum(to_string = "computer wins")]
    ComputerWin,
}

/// Which side scored the point on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointTo {
    /// The forecast was wrong; the human scores.
    Human,
    /// The forecast was right; the computer scores.
    Computer,
}

/// Everything that happened on one turn, for the front end to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TurnReport {
    /// Turn number the move was played on.
    turn: u32,
    /// What the computer forecast before the move was revealed.
    forecast: Move,
    /// The move the human actually played.
    actual: Move,
    /// Who scored the point.
    point_to: PointTo,
    /// Score after the point (positive favors the human).
    score: i32,
    /// Game status after the point.
    status: GameStatus,
}

/// One game of outguessing, owned by the controlling loop.
///
/// Strictly sequential: every mutation happens through one call at a time
/// from the owning loop, so there is no locking and no re-entrancy.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct GameSession {
    /// Rolling window of the last three moves.
    window: ContextWindow,
    /// Learned frequencies per context.
    table: FrequencyTable,
    /// Current score; positive favors the human, negative the computer.
    score: i32,
    /// Current turn number, starting at 1.
    turn: u32,
    /// Whether the front end should show the table before each prompt.
    table_visible: bool,
    /// Lead required to win.
    target_lead: i32,
}

impl GameSession {
    /// Creates a session with the original ten-point winning lead.
    pub fn new() -> Self {
        Self::with_target_lead(DEFAULT_TARGET_LEAD)
    }

    /// Creates a session that ends at a `lead`-point lead instead of ten.
    pub fn with_target_lead(lead: i32) -> Self {
        Self {
            window: ContextWindow::new(),
            table: FrequencyTable::new(),
            score: 0,
            turn: 1,
            table_visible: false,
            target_lead: lead.max(1),
        }
    }

    /// The computer's forecast for the upcoming move.
    ///
    /// Pure function of the current table and window; calling it repeatedly
    /// between moves returns the same answer.
    pub fn forecast(&self) -> Move {
        self.table.forecast(self.window.row_index(), self.window.latest())
    }

    /// Plays one turn: scores the forecast against `actual`, records the
    /// outcome (after warm-up), shifts the window, and advances the turn.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play(&mut self, actual: Move) -> TurnReport {
        let forecast = self.forecast();
        // Row selection must use the window as it was before this move.
        let row = self.window.row_index();

        let point_to = if forecast == actual {
            self.score -= 1;
            PointTo::Computer
        } else {
            self.score += 1;
            PointTo::Human
        };

        self.table.record(row, actual, self.turn);
        self.window.push(actual);

        let report = TurnReport {
            turn: self.turn,
            forecast,
            actual,
            point_to,
            score: self.score,
            status: self.status(),
        };
        self.turn += 1;

        debug!(
            forecast = %forecast,
            actual = %actual,
            score = self.score,
            status = %report.status,
            "turn played"
        );
        report
    }

    /// Flips the table-display flag and returns the new value.
    pub fn toggle_table(&mut self) -> bool {
        self.table_visible = !self.table_visible;
        self.table_visible
    }

    /// Replaces the table wholesale, zeroes the window, and restarts the turn
    /// counter at 1.
    ///
    /// The score is deliberately kept: a reset reseeds the predictor without
    /// forgiving either side's points, matching the original game.
    #[instrument(skip_all)]
    pub fn reset(&mut self, table: FrequencyTable) {
        self.table = table;
        self.window.reset();
        self.turn = 1;
        debug!(score = self.score, "session reset");
    }

    /// Current game status from the score alone.
    pub fn status(&self) -> GameStatus {
        if self.score >= self.target_lead {
            GameStatus::HumanWin
        } else if self.score <= -self.target_lead {
            GameStatus::ComputerWin
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
