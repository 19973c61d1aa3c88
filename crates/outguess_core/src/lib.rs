//! Outguess core - adaptive 0/1 sequence prediction for the guessing game.
//!
//! The human plays a stream of zeros and ones; the computer forecasts each
//! choice before it is revealed, using a frequency table keyed on the three
//! most recent moves.
//!
//! # Architecture
//!
//! - **Move**: the binary domain type, with fallible conversions from raw input
//! - **ContextWindow**: rolling window of the last three moves and its table
//!   row encoding
//! - **FrequencyTable**: 8x2 counter table with the anti-repeat tie-break and
//!   the warm-up guard
//! - **GameSession**: owns the predictor state plus score, turn counter, and
//!   display flag, and drives one full turn at a time
//!
//! The crate performs no I/O; the terminal front end lives in the `outguess`
//! binary crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod error;
mod moves;
mod session;
mod table;

pub use context::{CONTEXT_LEN, ContextWindow, RowIndex};
pub use error::GameError;
pub use moves::Move;
pub use session::{DEFAULT_TARGET_LEAD, GameSession, GameStatus, PointTo, TurnReport};
pub use table::{FrequencyTable, WARMUP_TURNS};
