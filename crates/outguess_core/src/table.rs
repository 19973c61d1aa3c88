//! Adaptive frequency table: one row per three-move context.

use crate::context::RowIndex;
use crate::error::GameError;
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Turns that populate the context window without training the table.
///
/// The window starts zero-filled, so the first transitions through it are
/// partially synthetic; recording them would bias the table toward the
/// all-zero context. The first three observations are sacrificed instead.
pub const WARMUP_TURNS: u32 = 3;

/// Frequency table over all eight three-move contexts.
///
/// Each row holds two counters: how often the next move after that context
/// was a 0, and how often it was a 1. Rows are selected with the window state
/// *before* the move being forecast or recorded, never with the move itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    rows: [[u32; 2]; RowIndex::COUNT],
}

impl FrequencyTable {
    /// Creates an all-zero table.
    pub fn new() -> Self {
        Self {
            rows: [[0; 2]; RowIndex::COUNT],
        }
    }

    /// Builds a table from 16 operator-supplied values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TableShape`] if `values` is not exactly 16 long,
    /// or [`GameError::InvalidCount`] if any value is negative or does not
    /// fit a `u32`.
    pub fn try_from_values(values: &[i64]) -> Result<Self, GameError> {
        if values.len() != 2 * RowIndex::COUNT {
            return Err(GameError::TableShape(values.len()));
        }
        let mut rows = [[0u32; 2]; RowIndex::COUNT];
        for (slot, &value) in rows.as_flattened_mut().iter_mut().zip(values) {
            *slot = u32::try_from(value).map_err(|_| GameError::InvalidCount(value))?;
        }
        Ok(Self { rows })
    }

    /// Forecasts the next move for the context at `row`.
    ///
    /// The majority counter wins. On a tie (including the all-zero starting
    /// state) the forecast is the opposite of `latest`, the most recent
    /// recorded move: with no statistical signal, bet against a repeat.
    pub fn forecast(&self, row: RowIndex, latest: Move) -> Move {
        let [zeros, ones] = self.rows[row.as_usize()];
        match zeros.cmp(&ones) {
            Ordering::Greater => Move::Zero,
            Ordering::Less => Move::One,
            Ordering::Equal => latest.opposite(),
        }
    }

    /// Records that `actual` followed the context at `row`, on turn `turn`.
    ///
    /// During the warm-up period (`turn <= 3`) the call is a no-op; see
    /// [`WARMUP_TURNS`].
    pub fn record(&mut self, row: RowIndex, actual: Move, turn: u32) {
        if turn <= WARMUP_TURNS {
            debug!(%row, %actual, turn, "warm-up turn, not recorded");
            return;
        }
        self.rows[row.as_usize()][actual.bit() as usize] += 1;
        debug!(%row, %actual, turn, counts = ?self.rows[row.as_usize()], "recorded outcome");
    }

    /// The counters at `row` as `[zeros, ones]`.
    pub fn counts(&self, row: RowIndex) -> [u32; 2] {
        self.rows[row.as_usize()]
    }

    /// Read-only view of the whole table, for the diagnostic display.
    pub fn rows(&self) -> &[[u32; 2]; RowIndex::COUNT] {
        &self.rows
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
