//! Number Guess - a console number guessing game
//!
//! Core modules:
//! - `sim`: Session state, hints and the per-guess state machine
//! - `console`: Interactive loop over any reader/writer pair
//! - `highscores`: Best score persisted to a text file
//! - `settings`: Range, guess limit and score file location

pub mod console;
pub mod error;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use console::{GameOutcome, play};
pub use error::{GameError, Result};
pub use highscores::ScoreStore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default guess range, matching the shipped game
    pub const DEFAULT_LOWER_BOUND: i64 = 1;
    pub const DEFAULT_UPPER_BOUND: i64 = 100;
    pub const DEFAULT_MAX_GUESSES: u32 = 7;

    /// Score file, relative to the working directory
    pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.txt";
}
