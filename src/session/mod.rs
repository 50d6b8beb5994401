//! Session and puzzle state machine.
//!
//! Per puzzle:
//!
//! ```text
//! ACTIVE --[correct guess]-----------------------> WON  (final)
//! ACTIVE --[wrong guess, guesses remain]---------> ACTIVE
//! ACTIVE --[wrong guess, no guesses remain]------> LOST (final)
//! WON | LOST --[start_puzzle]--> ACTIVE (next puzzle, or a new session)
//! ```
//!
//! Everything here is pure apart from the injected RNG: no storage, no
//! clock. Persisting the daily puzzle is the controller's job.

mod machine;
pub mod validation;

pub use machine::{GuessOutcome, Rejection, SessionState};
pub use validation::{validate_guess, GuessInputError, GuessValidation};
