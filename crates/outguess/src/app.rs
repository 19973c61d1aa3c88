//! The interactive game loop.

use crate::cli::Cli;
use crate::input::{self, Command};
use crate::screen;
use anyhow::{Context, Result};
use outguess_core::{GameSession, GameStatus};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Plays one full game over the given handles and returns how it ended.
///
/// The loop per turn: show the score bar (and the table when toggled on),
/// prompt with the turn number, then dispatch the entered command. Moves go
/// through the session; `t`, `r`, and `x` are handled here without consuming
/// a turn. Bad input re-prompts. Closing the input stream ends the game as
/// if `x` had been entered.
///
/// # Errors
///
/// Fails only on I/O errors from `output`; input problems are reported to
/// the player and retried.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, cli: &Cli) -> Result<GameStatus> {
    let mut session = GameSession::with_target_lead(cli.lead);
    if cli.table {
        session.toggle_table();
    }

    write!(output, "{}", screen::instructions()).context("writing instructions")?;

    loop {
        write!(
            output,
            "{}",
            screen::score_bar(*session.score(), *session.target_lead())
        )?;

        let forecast = session.forecast();
        if *session.table_visible() {
            write!(output, "{}", screen::table_view(&session, forecast))?;
        }

        write!(output, "{}. Your input: ", session.turn())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            info!("input stream closed, ending game");
            break;
        };

        let command = match input::parse_command(&line) {
            Ok(command) => command,
            Err(error) => {
                debug!(%error, "rejected input");
                writeln!(output, "   {error}")?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                info!(score = *session.score(), "player exited");
                break;
            }
            Command::ToggleTable => {
                let visible = session.toggle_table();
                debug!(visible, "table display toggled");
            }
            Command::Reset => {
                write!(
                    output,
                    "Enter 16 values to be used to set the moves history table: "
                )?;
                output.flush()?;
                match input::read_table(input) {
                    Ok(table) => {
                        session.reset(table);
                        info!("session reseeded by operator");
                    }
                    Err(error) => {
                        warn!(%error, "table seed rejected");
                        writeln!(output, "   {error}")?;
                    }
                }
            }
            Command::Play(actual) => {
                let report = session.play(actual);
                write!(
                    output,
                    "{}",
                    screen::turn_summary(&report, *session.target_lead())
                )?;
                if *report.status() != GameStatus::InProgress {
                    break;
                }
            }
        }
    }

    writeln!(output)?;
    match serde_json::to_string(&session) {
        Ok(snapshot) => debug!(%snapshot, "final session state"),
        Err(error) => warn!(%error, "could not serialize final session"),
    }
    Ok(session.status())
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
