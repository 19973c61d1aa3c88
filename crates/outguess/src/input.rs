//! Parsing of player commands and table seeds.

use outguess_core::{FrequencyTable, GameError, Move};
use std::io::BufRead;

/// A command the player can enter at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a move (`0` or `1`).
    Play(Move),
    /// Toggle the frequency-table view (`t`).
    ToggleTable,
    /// Reseed the predictor from 16 operator-supplied values (`r`).
    Reset,
    /// Leave the game (`x`).
    Quit,
}

/// Error that can occur while reading player input.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum InputError {
    /// The character is not one of the accepted keys.
    #[display("unrecognized input {_0:?}; enter 0, 1, t, r, or x")]
    UnknownCommand(char),

    /// The line was empty.
    #[display("enter 0, 1, t, r, or x")]
    Empty,

    /// A table seed token was not an integer.
    #[display("table seed values must be integers, got {_0:?}")]
    NotANumber(String),

    /// The input stream ended before the table seed was complete.
    #[display("input ended before the table seed was complete")]
    SeedTruncated,

    /// The core rejected the input.
    #[display("{_0}")]
    #[from]
    Game(GameError),

    /// The input stream failed.
    #[display("failed reading input: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Game(error) => Some(error),
            InputError::Io(error) => Some(error),
            _ => None,
        }
    }
}

/// Parses one prompt line into a [`Command`].
///
/// Only the first non-whitespace character counts, matching the original
/// game's character-at-a-time input; case is ignored.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for a blank line and
/// [`InputError::UnknownCommand`] for any key outside `0 1 t r x`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let Some(key) = line.trim().chars().next() else {
        return Err(InputError::Empty);
    };
    match key.to_ascii_uppercase() {
        '0' | '1' => Ok(Command::Play(Move::try_from(key)?)),
        'T' => Ok(Command::ToggleTable),
        'R' => Ok(Command::Reset),
        'X' => Ok(Command::Quit),
        _ => Err(InputError::UnknownCommand(key)),
    }
}

/// Reads 16 whitespace-separated integers (possibly spanning lines) and
/// builds the seeded table.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] for non-integer tokens,
/// [`InputError::SeedTruncated`] if the stream ends early, and the core's
/// [`GameError`] if the values are malformed (wrong count, negative).
pub fn read_table<R: BufRead>(input: &mut R) -> Result<FrequencyTable, InputError> {
    let mut values: Vec<i64> = Vec::with_capacity(16);
    let mut line = String::new();

    while values.len() < 16 {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::SeedTruncated);
        }
        for token in line.split_whitespace() {
            let value = token
                .parse()
                .map_err(|_| InputError::NotANumber(token.to_string()))?;
            values.push(value);
        }
    }

    Ok(FrequencyTable::try_from_values(&values)?)
}
