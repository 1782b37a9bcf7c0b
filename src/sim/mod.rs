//! Game session logic
//!
//! Pure and deterministic given the secret:
//! - Secret sampled once, from an injected RNG
//! - One input line per tick
//! - No console or filesystem access

pub mod hint;
pub mod state;
pub mod tick;

pub use hint::{Hint, produce_hint};
pub use state::{GamePhase, GameState, seeded_rng};
pub use tick::{TurnOutcome, parse_guess, tick};
