//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an action may run
//! from a given state. The session uses one to refuse guesses once a puzzle
//! is over, and the controller uses one to refuse `advance` while a puzzle
//! is still being played.

use super::state::{PuzzleStatus, State};
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use cardle::core::{Guard, PuzzleStatus};
///
/// let accepting = Guard::accepting_guesses();
///
/// assert!(accepting.check(&PuzzleStatus::Active));
/// assert!(!accepting.check(&PuzzleStatus::Won));
/// assert!(!accepting.check(&PuzzleStatus::Lost));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl Guard<PuzzleStatus> {
    /// Passes only while the puzzle still takes guesses.
    pub fn accepting_guesses() -> Self {
        Guard::new(|s: &PuzzleStatus| !s.is_final())
    }

    /// Passes only once the puzzle is over and may be left behind.
    pub fn finished() -> Self {
        Guard::new(|s: &PuzzleStatus| s.is_final())
    }
}
