//! Imperative shell around the session core.
//!
//! [`Game`] is the one place that knows about the catalog load, the store,
//! the RNG and today's date. Front-ends call its three actions
//! (`start_session`, `submit_guess`, `advance`) and render the
//! [`PuzzleView`] it hands back.

mod controller;
mod view;

pub use controller::{AdvanceOutcome, AdvanceRefusal, Game, GameError, LoadPhase};
pub use view::{scoreboard, ClueFrame, PuzzleView, ScoreSlot, CLUE_POS_JITTER};
