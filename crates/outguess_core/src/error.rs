//! Error types for the game core.

/// Error that can occur when converting raw input into core state.
///
/// The core has no I/O, so its error surface is narrow: a move outside
/// `{0, 1}` or a malformed table seed. Both are contract violations by the
/// caller; the front end validates input before it reaches the core and
/// re-prompts on failure rather than exiting.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The character is not a valid move (expected `'0'` or `'1'`).
    #[display("invalid move {_0:?}, expected '0' or '1'")]
    InvalidMove(char),

    /// A table seed had the wrong number of values (expected 16).
    #[display("table seed needs 16 values, got {_0}")]
    TableShape(usize),

    /// A table seed contained a negative or out-of-range counter.
    #[display("table counts must fit in a non-negative 32-bit value, got {_0}")]
    InvalidCount(i64),
}

impl std::error::Error for GameError {}
