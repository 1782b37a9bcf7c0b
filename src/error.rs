//! Error types for the guessing game.

use thiserror::Error;

/// Main error type for game operations.
///
/// Bad guesses and unreadable score files are recovered where they happen
/// and never show up here.
#[derive(Error, Debug)]
pub enum GameError {
    /// Settings that cannot describe a playable game.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Console or score file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the game reached a result.
    #[error("input closed before the game finished")]
    InputClosed,
}

/// Convenience Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
