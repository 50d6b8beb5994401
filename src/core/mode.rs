//! Game modes and their fixed settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of puzzles in one easy/hard session.
pub const SESSION_SIZE: usize = 5;

/// Static settings bound to a [`GameMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeConfig {
    /// Background zoom applied to the clue photo, in percent.
    pub zoom_percent: u32,
    /// Guesses granted per puzzle.
    pub max_guesses: u32,
    /// Whether a guess must also name the model year.
    pub require_year: bool,
    /// Whether the answer's make is handed to the player up front.
    pub reveals_make: bool,
}

const DAILY: ModeConfig = ModeConfig {
    zoom_percent: 333,
    max_guesses: 3,
    require_year: false,
    reveals_make: false,
};

const EASY: ModeConfig = ModeConfig {
    zoom_percent: 100,
    max_guesses: 5,
    require_year: false,
    reveals_make: true,
};

const HARD: ModeConfig = ModeConfig {
    zoom_percent: 400,
    max_guesses: 1,
    require_year: false,
    reveals_make: false,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Daily,
    Easy,
    Hard,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Daily, GameMode::Easy, GameMode::Hard];

    pub fn config(self) -> &'static ModeConfig {
        match self {
            Self::Daily => &DAILY,
            Self::Easy => &EASY,
            Self::Hard => &HARD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    pub fn is_daily(self) -> bool {
        matches!(self, Self::Daily)
    }

    /// Whether this mode tracks a five-puzzle scoreboard.
    pub fn keeps_score(self) -> bool {
        !self.is_daily()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode '{0}' (expected daily, easy or hard)")]
pub struct UnknownMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "easy" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}
