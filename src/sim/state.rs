//! Session state
//!
//! Everything a single game needs lives here. Nothing in it is persisted.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::{GameError, Result};
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the next guess
    AwaitingInput,
    /// Secret found
    Won,
    /// Ran out of guesses
    Exhausted,
}

impl GamePhase {
    /// Won and Exhausted end the session
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::AwaitingInput)
    }
}

/// Build the session RNG from a seed
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// A single guessing session
///
/// Only `tick` moves a session forward; outside `sim` it is read-only.
#[derive(Debug, Clone)]
pub struct GameState {
    settings: Settings,
    /// Fixed for the life of the session
    secret: i64,
    /// Guesses consumed so far (never above `max_guesses`)
    pub(super) guesses_taken: u32,
    /// Previous in-range wrong guess
    pub(super) last_guess: Option<i64>,
    pub(super) phase: GamePhase,
}

impl GameState {
    /// Start a session with a secret drawn uniformly from the settings' range
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R) -> Result<Self> {
        settings.validate()?;
        let secret = rng.random_range(settings.lower_bound..=settings.upper_bound);
        log::debug!(
            "New session: range {}..={}, {} guesses",
            settings.lower_bound,
            settings.upper_bound,
            settings.max_guesses
        );
        Ok(Self::build(settings, secret))
    }

    /// Start a session with a known secret
    pub fn with_secret(settings: &Settings, secret: i64) -> Result<Self> {
        settings.validate()?;
        if !settings.in_range(secret) {
            return Err(GameError::Config(format!(
                "secret {} is outside {}..={}",
                secret, settings.lower_bound, settings.upper_bound
            )));
        }
        Ok(Self::build(settings, secret))
    }

    fn build(settings: &Settings, secret: i64) -> Self {
        Self {
            settings: settings.clone(),
            secret,
            guesses_taken: 0,
            last_guess: None,
            phase: GamePhase::AwaitingInput,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn guesses_taken(&self) -> u32 {
        self.guesses_taken
    }

    pub fn last_guess(&self) -> Option<i64> {
        self.last_guess
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// 1-based ordinal of the next guess, for prompts
    pub fn next_guess_number(&self) -> u32 {
        self.guesses_taken + 1
    }
}
