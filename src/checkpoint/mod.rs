//! Save and resume for the daily puzzle.
//!
//! Only the guess-relevant part of a daily session is written: how many
//! guesses are left, whether the puzzle was won, and the guesses made. The
//! puzzle itself is never stored; it is re-derived from the date on resume,
//! so a catalog change can never leave a saved game pointing at the wrong
//! car.
//!
//! One entry exists per calendar day under `dailyPuzzle-<YYYY-MM-DD>`.
//! Entries for past days are left in place.

use crate::core::{GameMode, GuessRecord, PuzzleDate, PuzzleStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod error;
pub mod store;

pub use error::CheckpointError;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prefix of every daily storage key.
pub const STORAGE_KEY_PREFIX: &str = "dailyPuzzle-";

/// Persisted daily payload.
///
/// Serializes to exactly `{"guessesRemaining", "hasWon", "guesses"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckpoint {
    pub guesses_remaining: u32,
    pub has_won: bool,
    pub guesses: Vec<GuessRecord>,
}

impl DailyCheckpoint {
    pub fn status(&self) -> PuzzleStatus {
        PuzzleStatus::derive(self.has_won, self.guesses_remaining)
    }

    fn validate(&self) -> Result<(), String> {
        let max = GameMode::Daily.config().max_guesses;
        if self.guesses_remaining > max {
            return Err(format!(
                "guessesRemaining {} exceeds the daily limit of {max}",
                self.guesses_remaining
            ));
        }
        Ok(())
    }
}

/// Storage key for the daily puzzle of `date`.
///
/// ```rust
/// use cardle::checkpoint::storage_key;
/// use cardle::core::PuzzleDate;
///
/// let date = PuzzleDate::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(storage_key(&date), "dailyPuzzle-2024-01-01");
/// ```
pub fn storage_key(date: &PuzzleDate) -> String {
    format!("{STORAGE_KEY_PREFIX}{date}")
}

/// Write `checkpoint` as the saved state for `date`.
pub fn save<K: KeyValueStore + ?Sized>(
    store: &mut K,
    date: &PuzzleDate,
    checkpoint: &DailyCheckpoint,
) -> Result<(), CheckpointError> {
    let key = storage_key(date);
    let json = serde_json::to_string(checkpoint)
        .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))?;
    store.set(&key, json)?;
    debug!(%key, status = ?checkpoint.status(), "daily state saved");
    Ok(())
}

/// Read the saved state for `date`, if any.
///
/// Never fails: a missing entry, an unreadable store and a malformed payload
/// all come back as `None`, the latter two with a warning.
pub fn load<K: KeyValueStore + ?Sized>(store: &K, date: &PuzzleDate) -> Option<DailyCheckpoint> {
    let key = storage_key(date);
    match try_load(store, &key) {
        Ok(found) => found,
        Err(e) => {
            warn!(%key, error = %e, "ignoring saved daily state");
            None
        }
    }
}

fn try_load<K: KeyValueStore + ?Sized>(
    store: &K,
    key: &str,
) -> Result<Option<DailyCheckpoint>, CheckpointError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let malformed = |reason: String| CheckpointError::Malformed {
        key: key.to_string(),
        reason,
    };
    let checkpoint: DailyCheckpoint =
        serde_json::from_str(&raw).map_err(|e| malformed(e.to_string()))?;
    checkpoint.validate().map_err(malformed)?;
    Ok(Some(checkpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> PuzzleDate {
        PuzzleDate::from_ymd(2024, 1, 1).unwrap()
    }

    fn sample() -> DailyCheckpoint {
        DailyCheckpoint {
            guesses_remaining: 1,
            has_won: false,
            guesses: vec![
                GuessRecord::trimmed("Ford", "Focus", ""),
                GuessRecord::trimmed("Toyota", "Corolla", ""),
            ],
        }
    }

    #[test]
    fn payload_has_exactly_three_camel_case_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["guesses", "guessesRemaining", "hasWon"]);
        assert_eq!(value["guesses"][0]["make"], "Ford");
        assert_eq!(value["guesses"][0]["year"], "");
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        save(&mut store, &date(), &sample()).unwrap();

        assert_eq!(load(&store, &date()), Some(sample()));
    }

    #[test]
    fn load_is_keyed_by_date() {
        let mut store = MemoryStore::new();
        save(&mut store, &date(), &sample()).unwrap();

        let other = PuzzleDate::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(load(&store, &other), None);
    }

    #[test]
    fn saves_for_different_days_coexist() {
        let mut store = MemoryStore::new();
        let other = PuzzleDate::from_ymd(2024, 1, 2).unwrap();
        save(&mut store, &date(), &sample()).unwrap();
        save(&mut store, &other, &sample()).unwrap();

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn malformed_payload_loads_as_absent() {
        let mut store = MemoryStore::new();
        store
            .set(&storage_key(&date()), "{\"guessesRemaining\": ".to_string())
            .unwrap();

        assert_eq!(load(&store, &date()), None);
    }

    #[test]
    fn negative_guess_count_loads_as_absent() {
        let mut store = MemoryStore::new();
        store
            .set(
                &storage_key(&date()),
                r#"{"guessesRemaining": -1, "hasWon": false, "guesses": []}"#.to_string(),
            )
            .unwrap();

        assert_eq!(load(&store, &date()), None);
    }

    #[test]
    fn guess_count_above_daily_limit_loads_as_absent() {
        let mut store = MemoryStore::new();
        store
            .set(
                &storage_key(&date()),
                r#"{"guessesRemaining": 9, "hasWon": false, "guesses": []}"#.to_string(),
            )
            .unwrap();

        assert_eq!(load(&store, &date()), None);
    }

    #[test]
    fn corrupt_store_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);

        assert_eq!(load(&store, &date()), None);
    }

    #[test]
    fn payload_written_by_the_browser_game_loads() {
        let mut store = MemoryStore::new();
        store
            .set(
                "dailyPuzzle-2024-01-01",
                r#"{"guessesRemaining":2,"hasWon":true,"guesses":[{"make":"Volkswagen","model":"Golf R","year":""}]}"#
                    .to_string(),
            )
            .unwrap();

        let loaded = load(&store, &date()).unwrap();
        assert!(loaded.has_won);
        assert_eq!(loaded.status(), PuzzleStatus::Won);
        assert_eq!(loaded.guesses[0].model, "Golf R");
    }
}
