//! Number Guess entry point
//!
//! Sets up logging, loads the best score and runs one game on the terminal.

use std::io;
use std::process::ExitCode;

use number_guess::sim::{GameState, seeded_rng};
use number_guess::{GameOutcome, ScoreStore, Settings};

fn main() -> ExitCode {
    // Quiet unless RUST_LOG asks otherwise, so logs don't break up the prompts
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    match run() {
        Ok(outcome) => {
            log::info!("Game finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> number_guess::Result<GameOutcome> {
    let settings = Settings::default();
    settings.validate()?;

    let mut scores = ScoreStore::load(&settings.high_score_file);

    let seed: u64 = rand::random();
    log::debug!("Session seed {}", seed);
    let mut state = GameState::new(&settings, &mut seeded_rng(seed))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    number_guess::play(
        &mut state,
        &mut scores,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
