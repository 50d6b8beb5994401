//! Cardle: guess the car from a cropped photo.
//!
//! Cardle follows a "pure core, imperative shell" layout. The session state
//! machine, the puzzle selector and the daily persistence rule are plain
//! functions over owned values; the [`game::Game`] controller wraps them with
//! the catalog load, the store, the RNG and the clock.
//!
//! # Core Concepts
//!
//! - **Modes**: daily (one date-seeded puzzle per day, resumable), easy and
//!   hard (random puzzles in sessions of five)
//! - **Session**: the current puzzle, guesses left, guess history and the
//!   session scoreboard
//! - **Checkpoint**: the minimal daily payload, keyed by date
//!
//! # Example
//!
//! ```rust
//! use cardle::catalog::Catalog;
//! use cardle::checkpoint::MemoryStore;
//! use cardle::core::{GameMode, PuzzleDate, PuzzleStatus};
//! use cardle::game::Game;
//! use cardle::session::GuessOutcome;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let date = PuzzleDate::from_ymd(2024, 1, 1).unwrap();
//! let mut game = Game::new(MemoryStore::new(), StdRng::seed_from_u64(7)).with_date(date);
//! game.catalog_loaded(Ok(Catalog::builtin()));
//!
//! let view = game.start_session(GameMode::Daily).unwrap();
//! assert_eq!(view.guesses_remaining, 3);
//!
//! let outcome = game.submit_guess("Volkswagen", "golf r", "").unwrap();
//! assert_eq!(outcome, GuessOutcome::Win);
//! assert_eq!(game.view().unwrap().status, PuzzleStatus::Won);
//! ```

pub mod catalog;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod game;
pub mod selector;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use crate::core::{GameMode, GuessRecord, PuzzleDate, PuzzleStatus, State, Vehicle, SESSION_SIZE};
pub use game::{Game, GameError, PuzzleView};
pub use session::{GuessOutcome, SessionState};
