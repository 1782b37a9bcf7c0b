//! Interactive console loop
//!
//! Generic over the input and output streams so whole games can be driven
//! from memory.

use std::io::{BufRead, Write};

use crate::error::{GameError, Result};
use crate::highscores::ScoreStore;
use crate::sim::{GamePhase, GameState, TurnOutcome, tick};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: u32, new_high_score: bool },
    Exhausted { secret: i64 },
}

/// Print the welcome banner and the current best score
pub fn print_banner<W: Write>(out: &mut W, state: &GameState, scores: &ScoreStore) -> Result<()> {
    let settings = state.settings();
    writeln!(out, "Welcome to the Number Guessing Game!")?;
    writeln!(
        out,
        "I'm thinking of a number between {} and {}.",
        settings.lower_bound, settings.upper_bound
    )?;
    writeln!(out, "You have {} guesses.", settings.max_guesses)?;
    match scores.best() {
        Some(best) => writeln!(out, "Current high score: {} guesses.", best)?,
        None => writeln!(out, "No high score yet. Be the first to set one!")?,
    }
    Ok(())
}

/// Run a session to completion.
///
/// Reads one line per prompt until the secret is found or the guesses run
/// out. A win is offered to the score store before returning.
pub fn play<R, W>(
    state: &mut GameState,
    scores: &mut ScoreStore,
    input: &mut R,
    out: &mut W,
) -> Result<GameOutcome>
where
    R: BufRead,
    W: Write,
{
    print_banner(out, state, scores)?;

    let mut line = String::new();
    loop {
        match state.phase() {
            GamePhase::AwaitingInput => {}
            GamePhase::Won => return report_win(state, scores, out),
            GamePhase::Exhausted => return report_loss(state, out),
        }

        write!(out, "Guess #{}: ", state.next_guess_number())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        match tick(state, &line) {
            TurnOutcome::Invalid => {
                writeln!(out, "Invalid input. Please enter an integer.")?;
            }
            TurnOutcome::OutOfRange => {
                let settings = state.settings();
                writeln!(
                    out,
                    "Please guess a number within the range {} to {}.",
                    settings.lower_bound, settings.upper_bound
                )?;
            }
            TurnOutcome::Guessed(hint) => writeln!(out, "{}", hint)?,
            // Phase check at the top of the loop reports the result
            TurnOutcome::Finished => continue,
        }
    }
}

fn report_win<W: Write>(
    state: &GameState,
    scores: &mut ScoreStore,
    out: &mut W,
) -> Result<GameOutcome> {
    let guesses = state.guesses_taken();
    writeln!(
        out,
        "Congratulations! You guessed the number in {} guesses.",
        guesses
    )?;
    let new_high_score = scores.conditional_update(guesses)?;
    if new_high_score {
        writeln!(out, "Congratulations! You set a new high score!")?;
    }
    out.flush()?;
    Ok(GameOutcome::Won {
        guesses,
        new_high_score,
    })
}

fn report_loss<W: Write>(state: &GameState, out: &mut W) -> Result<GameOutcome> {
    let secret = state.secret();
    writeln!(out, "Game over! You ran out of guesses.")?;
    writeln!(out, "The secret number was {}.", secret)?;
    out.flush()?;
    Ok(GameOutcome::Exhausted { secret })
}
