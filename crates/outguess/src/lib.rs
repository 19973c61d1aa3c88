//! Terminal front end for the 0/1 guessing game.
//!
//! The human enters `0` or `1` at a prompt; the computer forecasts each entry
//! before it is revealed and the score bar slides toward whichever side keeps
//! winning points. `t` toggles the diagnostic frequency-table view, `r`
//! reseeds the predictor from 16 operator-supplied values, `x` exits.
//!
//! All game logic lives in `outguess_core`; this crate only parses commands
//! and renders screens. The loop in [`run`] is written against generic
//! `BufRead`/`Write` handles so whole games can be scripted in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod screen;

pub use app::run;
pub use cli::Cli;
pub use input::{Command, InputError, parse_command, read_table};
pub use screen::{instructions, score_bar, table_view, turn_summary};
