//! Core domain type for the guessing game: the binary move.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// A single binary choice in the game.
///
/// Moves are the only input the predictor ever sees: the human plays a stream
/// of zeros and ones, and the computer forecasts each one from the three that
/// came before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// The move `0`.
    Zero,
    /// The move `1`.
    One,
}

impl Move {
    /// Returns the other move.
    ///
    /// Used by the anti-repeat tie-break: when a table row carries no signal,
    /// the forecast is the opposite of the most recent move.
    pub fn opposite(self) -> Self {
        match self {
            Move::Zero => Move::One,
            Move::One => Move::Zero,
        }
    }

    /// The move as a single bit.
    pub fn bit(self) -> u8 {
        match self {
            Move::Zero => 0,
            Move::One => 1,
        }
    }

    /// Builds a move from the low bit of `bit`.
    ///
    /// Callers are expected to have masked the value already; anything with
    /// the low bit set maps to [`Move::One`].
    pub(crate) fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 { Move::One } else { Move::Zero }
    }
}

impl TryFrom<char> for Move {
    type Error = GameError;

    /// Parses `'0'` or `'1'`; anything else is [`GameError::InvalidMove`].
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Move::Zero),
            '1' => Ok(Move::One),
            other => Err(GameError::InvalidMove(other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bit())
    }
}
