//! Core game types.
//!
//! This module contains the pure vocabulary of the game:
//! - Puzzle status via the `State` trait
//! - Guard predicates for transition control
//! - Modes, vehicles, guesses and the calendar date of a daily puzzle
//!
//! Nothing in here touches storage, the clock (beyond `PuzzleDate::today`)
//! or randomness.

mod date;
mod guard;
mod mode;
mod state;
mod vehicle;

pub use date::PuzzleDate;
pub use guard::Guard;
pub use mode::{GameMode, ModeConfig, UnknownMode, SESSION_SIZE};
pub use state::{PuzzleStatus, State};
pub use vehicle::{GuessRecord, Vehicle};
