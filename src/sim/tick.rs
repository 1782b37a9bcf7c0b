//! Session state machine
//!
//! One call to [`tick`] consumes one line of player input.

use std::num::{IntErrorKind, ParseIntError};

use super::hint::{Hint, produce_hint};
use super::state::{GamePhase, GameState};

/// What a single line of input did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Not an integer; no guess consumed
    Invalid,
    /// Integer outside the range, however large; no guess consumed
    OutOfRange,
    /// A guess was consumed
    Guessed(Hint),
    /// Session already over; input ignored
    Finished,
}

/// Parse a line of player input as a guess
pub fn parse_guess(line: &str) -> Result<i64, ParseIntError> {
    line.trim().parse()
}

fn is_overflow(err: &ParseIntError) -> bool {
    matches!(
        err.kind(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
    )
}

/// Advance the session by one line of input
pub fn tick(state: &mut GameState, line: &str) -> TurnOutcome {
    if state.phase.is_terminal() {
        return TurnOutcome::Finished;
    }

    let guess = match parse_guess(line) {
        Ok(guess) => guess,
        // Still an integer, just far outside any i64 range
        Err(e) if is_overflow(&e) => {
            log::debug!("Rejected oversized guess {:?}", line.trim());
            return TurnOutcome::OutOfRange;
        }
        Err(_) => {
            log::debug!("Rejected non-integer input {:?}", line.trim());
            return TurnOutcome::Invalid;
        }
    };

    if !state.settings().in_range(guess) {
        log::debug!("Rejected out-of-range guess {}", guess);
        return TurnOutcome::OutOfRange;
    }

    state.guesses_taken += 1;
    let hint = produce_hint(state, guess);

    if hint.is_correct() {
        state.phase = GamePhase::Won;
        log::debug!("Won after {} guesses", state.guesses_taken);
        return TurnOutcome::Guessed(hint);
    }

    state.last_guess = Some(guess);
    if state.guesses_taken >= state.settings().max_guesses {
        state.phase = GamePhase::Exhausted;
        log::debug!("Out of guesses after {}", state.guesses_taken);
    }

    TurnOutcome::Guessed(hint)
}
