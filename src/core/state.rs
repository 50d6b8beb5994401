//! The `State` trait and the per-puzzle status it describes.
//!
//! A puzzle moves `Active -> Won` on a correct guess and `Active -> Lost`
//! once the last guess is spent. Both ends are final; nothing moves a puzzle
//! out of them except starting a new one.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the finite states tracked by the game.
///
/// All methods are pure. Implementors are small enums whose values describe
/// where a puzzle (or the controller) currently is.
///
/// # Example
///
/// ```rust
/// use cardle::core::{PuzzleStatus, State};
///
/// assert_eq!(PuzzleStatus::Active.name(), "Active");
/// assert!(PuzzleStatus::Won.is_final());
/// assert!(PuzzleStatus::Lost.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Where the current puzzle stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleStatus {
    /// Guesses are still being accepted.
    Active,
    /// A correct guess was made.
    Won,
    /// Every guess was spent without a correct answer.
    Lost,
}

impl PuzzleStatus {
    /// Derive the status from the two fields the session actually stores.
    pub fn derive(has_won: bool, guesses_remaining: u32) -> Self {
        if has_won {
            Self::Won
        } else if guesses_remaining == 0 {
            Self::Lost
        } else {
            Self::Active
        }
    }
}

impl State for PuzzleStatus {
    fn name(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Lost)
    }
}
