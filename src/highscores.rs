//! Best score persistence
//!
//! The best score is the fewest guesses ever needed to win. It lives in a
//! plain text file holding nothing but the decimal number.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File-backed best score
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    /// `None` until a game has been won. Any integer on disk is taken as-is.
    best: Option<i64>,
}

impl ScoreStore {
    /// Load the best score from `path`.
    ///
    /// A missing file, unreadable file or non-integer content all mean
    /// "no record yet".
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let best = match fs::read_to_string(&path) {
            Ok(text) => match text.trim().parse::<i64>() {
                Ok(value) => {
                    log::debug!("Loaded best score {} from {}", value, path.display());
                    Some(value)
                }
                Err(_) => {
                    log::debug!("Ignoring malformed score file {}", path.display());
                    None
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No score file at {}, starting fresh", path.display());
                None
            }
            Err(e) => {
                log::warn!("Could not read score file {}: {}", path.display(), e);
                None
            }
        };
        Self { path, best }
    }

    /// Fewest guesses ever needed to win
    pub fn best(&self) -> Option<i64> {
        self.best
    }

    /// Check if a guess count would beat the current best
    pub fn qualifies(&self, guesses: u32) -> bool {
        self.best.is_none_or(|best| i64::from(guesses) < best)
    }

    /// Record a win, persisting it if it beats the current best.
    /// Returns whether a new high score was set.
    pub fn conditional_update(&mut self, guesses: u32) -> Result<bool> {
        if !self.qualifies(guesses) {
            return Ok(false);
        }
        self.persist(guesses)?;
        self.best = Some(i64::from(guesses));
        Ok(true)
    }

    /// Overwrite the score file with `value`
    pub fn persist(&self, value: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value.to_string())?;
        log::info!("Best score {} saved to {}", value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn score_path(dir: &TempDir) -> PathBuf {
        dir.path().join("high_score.txt")
    }

    #[test]
    fn test_missing_file_is_unset() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::load(score_path(&dir));
        assert_eq!(store.best(), None);
    }

    #[test]
    fn test_malformed_file_is_unset() {
        let dir = TempDir::new().unwrap();
        for content in ["", "abc", "3.5", "3 4"] {
            fs::write(score_path(&dir), content).unwrap();
            let store = ScoreStore::load(score_path(&dir));
            assert_eq!(store.best(), None, "{:?}", content);
        }
    }

    #[test]
    fn test_negative_record_is_kept() {
        let dir = TempDir::new().unwrap();
        fs::write(score_path(&dir), "-2").unwrap();
        let mut store = ScoreStore::load(score_path(&dir));
        assert_eq!(store.best(), Some(-2));

        assert!(!store.qualifies(1));
        assert!(!store.conditional_update(1).unwrap());
        assert_eq!(store.best(), Some(-2));
        assert_eq!(fs::read_to_string(score_path(&dir)).unwrap(), "-2");
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        let dir = TempDir::new().unwrap();
        fs::write(score_path(&dir), "4\n").unwrap();
        assert_eq!(ScoreStore::load(score_path(&dir)).best(), Some(4));
    }

    #[test]
    fn test_persist_then_load() {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::load(score_path(&dir));
        for value in [0, 1, 42, u32::MAX] {
            store.persist(value).unwrap();
            let store = ScoreStore::load(score_path(&dir));
            assert_eq!(store.best(), Some(i64::from(value)));
        }
    }

    #[test]
    fn test_persist_writes_bare_number() {
        let dir = TempDir::new().unwrap();
        ScoreStore::load(score_path(&dir)).persist(12).unwrap();
        assert_eq!(fs::read_to_string(score_path(&dir)).unwrap(), "12");
    }

    #[test]
    fn test_first_win_sets_record() {
        let dir = TempDir::new().unwrap();
        let mut store = ScoreStore::load(score_path(&dir));
        assert!(store.conditional_update(3).unwrap());
        assert_eq!(store.best(), Some(3));
        assert_eq!(fs::read_to_string(score_path(&dir)).unwrap(), "3");
    }

    #[test]
    fn test_worse_or_equal_score_is_noop() {
        let dir = TempDir::new().unwrap();
        fs::write(score_path(&dir), "3").unwrap();
        let mut store = ScoreStore::load(score_path(&dir));

        assert!(!store.conditional_update(5).unwrap());
        assert!(!store.conditional_update(3).unwrap());
        assert_eq!(store.best(), Some(3));
        assert_eq!(fs::read_to_string(score_path(&dir)).unwrap(), "3");
    }

    #[test]
    fn test_better_score_replaces_record() {
        let dir = TempDir::new().unwrap();
        fs::write(score_path(&dir), "5").unwrap();
        let mut store = ScoreStore::load(score_path(&dir));
        assert!(store.conditional_update(2).unwrap());
        assert_eq!(ScoreStore::load(score_path(&dir)).best(), Some(2));
    }

    #[test]
    fn test_noop_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        fs::write(score_path(&dir), "1").unwrap();
        let other = dir.path().join("other.txt");
        let mut store = ScoreStore::load(score_path(&dir));
        store.path = other.clone();
        assert!(!store.conditional_update(4).unwrap());
        assert!(!other.exists());
    }

    #[test]
    fn test_persist_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("scores").join("best.txt");
        let mut store = ScoreStore::load(&nested);
        assert!(store.conditional_update(6).unwrap());
        assert_eq!(fs::read_to_string(&nested).unwrap(), "6");
    }

    #[test]
    fn test_best_only_decreases() {
        let dir = TempDir::new().unwrap();
        let mut store = ScoreStore::load(score_path(&dir));
        let mut previous: Option<i64> = None;
        for guesses in [6, 7, 4, 4, 9, 2, 3] {
            store.conditional_update(guesses).unwrap();
            let best = store.best().unwrap();
            if let Some(prev) = previous {
                assert!(best <= prev);
            }
            previous = Some(best);
        }
        assert_eq!(store.best(), Some(2));
    }
}
