//! Rolling three-move context and its frequency-table row encoding.

use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Number of prior moves the predictor conditions on.
pub const CONTEXT_LEN: usize = 3;

/// The ordered window of the last three moves, oldest first.
///
/// The window always holds exactly three moves. It starts (and resets to)
/// all zeros, then shifts left once per accepted move: the oldest move falls
/// off the front and the newest is appended at the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    moves: [Move; CONTEXT_LEN],
}

impl ContextWindow {
    /// Creates a fresh all-zero window.
    pub fn new() -> Self {
        Self {
            moves: [Move::Zero; CONTEXT_LEN],
        }
    }

    /// Shifts the window left and appends `mv` as the newest move.
    pub fn push(&mut self, mv: Move) {
        self.moves[0] = self.moves[1];
        self.moves[1] = self.moves[2];
        self.moves[2] = mv;
    }

    /// Restores the all-zero starting state.
    pub fn reset(&mut self) {
        self.moves = [Move::Zero; CONTEXT_LEN];
    }

    /// The most recent move in the window.
    pub fn latest(&self) -> Move {
        self.moves[CONTEXT_LEN - 1]
    }

    /// The window contents, oldest first.
    pub fn moves(&self) -> [Move; CONTEXT_LEN] {
        self.moves
    }

    /// Encodes the window as a frequency-table row index.
    ///
    /// The oldest move is the most significant bit, so `(1, 0, 1)` encodes
    /// to row 5. The result is in range by construction.
    pub fn row_index(&self) -> RowIndex {
        let value = self
            .moves
            .iter()
            .fold(0u8, |acc, mv| (acc << 1) | mv.bit());
        RowIndex(value)
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContextWindow {
    /// Formats the window as three bits, oldest first (e.g. `010`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mv in self.moves {
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Index of a frequency-table row, one per 3-bit context value.
///
/// Only a [`ContextWindow`] or the [`RowIndex::all`] enumeration can produce
/// one, so table lookups never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowIndex(u8);

impl RowIndex {
    /// Number of distinct contexts, and so of table rows.
    pub const COUNT: usize = 1 << CONTEXT_LEN;

    /// Iterates all row indices in order, `000` through `111`.
    pub fn all() -> impl Iterator<Item = RowIndex> {
        (0..Self::COUNT as u8).map(RowIndex)
    }

    /// The index as a table offset.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Decodes the index back into its context, oldest move first.
    pub fn context(self) -> [Move; CONTEXT_LEN] {
        [
            Move::from_bit(self.0 >> 2),
            Move::from_bit(self.0 >> 1),
            Move::from_bit(self.0),
        ]
    }
}

impl std::fmt::Display for RowIndex {
    /// Formats the index as its 3-bit context (e.g. `010` for row 2).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}
