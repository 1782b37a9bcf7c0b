//! Hint generation

use std::fmt;

use super::state::GameState;

/// Feedback for a single in-range guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Correct,
    /// Below the secret; `warmer` when the guess went up from the last one
    TooLow { warmer: bool },
    /// Above the secret; `warmer` when the guess went down from the last one
    TooHigh { warmer: bool },
}

impl Hint {
    pub fn is_correct(&self) -> bool {
        matches!(self, Hint::Correct)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Correct => f.write_str("That's the number!"),
            Hint::TooLow { warmer: true } => {
                f.write_str("Your guess is too low, but you're getting warmer!")
            }
            Hint::TooLow { warmer: false } => {
                f.write_str("Your guess is too low. Try a higher number.")
            }
            Hint::TooHigh { warmer: true } => {
                f.write_str("Your guess is too high, but you're getting warmer!")
            }
            Hint::TooHigh { warmer: false } => {
                f.write_str("Your guess is too high. Try a lower number.")
            }
        }
    }
}

/// Compare a guess against the secret and the previous guess.
///
/// "Warmer" only looks at which way the guess moved, not how far it is from
/// the secret: going from 10 down to 5 with a secret of 7 is plain "too low".
pub fn produce_hint(state: &GameState, guess: i64) -> Hint {
    let secret = state.secret();
    if guess < secret {
        Hint::TooLow {
            warmer: state.last_guess.is_some_and(|last| guess > last),
        }
    } else if guess > secret {
        Hint::TooHigh {
            warmer: state.last_guess.is_some_and(|last| guess < last),
        }
    } else {
        Hint::Correct
    }
}
