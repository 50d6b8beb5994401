//! Catalog vehicles and the guesses made against them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A car that can be the answer to a puzzle. Never mutated once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: String,
    /// Photo filename, resolved by the front-end.
    #[serde(rename = "filename")]
    pub image_ref: String,
}

impl Vehicle {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year: year.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Whether `guess` names this vehicle.
    ///
    /// Make and model compare case-insensitively; the year only counts when
    /// `require_year` is set, and then it must match exactly.
    pub fn is_named_by(&self, guess: &GuessRecord, require_year: bool) -> bool {
        self.make.to_lowercase() == guess.make.to_lowercase()
            && self.model.to_lowercase() == guess.model.to_lowercase()
            && (!require_year || self.year == guess.year)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.make, self.model, self.year)
    }
}

/// One submitted guess. Appended to the puzzle's history, never edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub year: String,
}

impl GuessRecord {
    /// Build a record from raw input, trimming every field.
    pub fn trimmed(make: &str, model: &str, year: &str) -> Self {
        Self {
            make: make.trim().to_string(),
            model: model.trim().to_string(),
            year: year.trim().to_string(),
        }
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.make, self.model)?;
        if !self.year.is_empty() {
            write!(f, " ({})", self.year)?;
        }
        Ok(())
    }
}
