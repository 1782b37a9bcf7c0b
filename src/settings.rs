//! Game settings
//!
//! The range, the guess limit and where the best score lives. Fixed by the
//! caller before a session starts.

use std::path::{Path, PathBuf};

use crate::consts::{
    DEFAULT_HIGH_SCORE_FILE, DEFAULT_LOWER_BOUND, DEFAULT_MAX_GUESSES, DEFAULT_UPPER_BOUND,
};
use crate::error::{GameError, Result};

/// Session parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Smallest valid guess (inclusive)
    pub lower_bound: i64,
    /// Largest valid guess (inclusive)
    pub upper_bound: i64,
    /// Guesses allowed before the game is lost
    pub max_guesses: u32,
    /// Text file holding the best score
    pub high_score_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            max_guesses: DEFAULT_MAX_GUESSES,
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
        }
    }
}

impl Settings {
    /// Create settings for a range and guess limit, keeping the default score file
    pub fn new(lower_bound: i64, upper_bound: i64, max_guesses: u32) -> Self {
        Self {
            lower_bound,
            upper_bound,
            max_guesses,
            ..Self::default()
        }
    }

    /// Use a different score file
    pub fn with_high_score_file(mut self, path: impl AsRef<Path>) -> Self {
        self.high_score_file = path.as_ref().to_path_buf();
        self
    }

    /// Reject settings that cannot describe a playable game
    pub fn validate(&self) -> Result<()> {
        if self.lower_bound > self.upper_bound {
            return Err(GameError::Config(format!(
                "lower bound {} is greater than upper bound {}",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.max_guesses == 0 {
            return Err(GameError::Config("max guesses must be at least 1".into()));
        }
        Ok(())
    }

    /// Whether a guess falls inside the range
    pub fn in_range(&self, guess: i64) -> bool {
        (self.lower_bound..=self.upper_bound).contains(&guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_game() {
        let settings = Settings::default();
        assert_eq!(settings.lower_bound, 1);
        assert_eq!(settings.upper_bound, 100);
        assert_eq!(settings.max_guesses, 7);
        assert_eq!(settings.high_score_file, PathBuf::from("high_score.txt"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_single_value_range_is_valid() {
        assert!(Settings::new(4, 4, 1).validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = Settings::new(10, 1, 5).validate().unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
        assert!(err.to_string().contains("greater than upper bound"));
    }

    #[test]
    fn test_zero_guesses_rejected() {
        let err = Settings::new(1, 10, 0).validate().unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_in_range_is_inclusive() {
        let settings = Settings::new(1, 15, 5);
        assert!(settings.in_range(1));
        assert!(settings.in_range(15));
        assert!(!settings.in_range(0));
        assert!(!settings.in_range(16));
    }

    #[test]
    fn test_with_high_score_file() {
        let settings = Settings::new(1, 15, 5).with_high_score_file("scores/best.txt");
        assert_eq!(settings.high_score_file, PathBuf::from("scores/best.txt"));
    }
}
