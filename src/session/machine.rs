//! The session value and its transitions.

use super::validation::{validate_guess, GuessInputError};
use crate::catalog::CatalogError;
use crate::checkpoint::DailyCheckpoint;
use crate::core::{
    GameMode, Guard, GuessRecord, PuzzleDate, PuzzleStatus, State, Vehicle, SESSION_SIZE,
};
use crate::selector::{daily_index, select_puzzle};
use rand::Rng;
use stillwater::validation::Validation;
use tracing::debug;

/// Why a guess was turned away without touching the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The puzzle already ended in the given status.
    PuzzleFinished(PuzzleStatus),
    /// One or more required fields were blank.
    InvalidInput(Vec<GuessInputError>),
}

/// Result of submitting a guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Correct; the puzzle is won.
    Win,
    /// Wrong, but guesses remain.
    IncorrectContinue { remaining: u32 },
    /// Wrong, and that was the last guess.
    LossOutOfGuesses,
    /// Nothing happened.
    Rejected(Rejection),
}

impl GuessOutcome {
    /// Whether the guess was recorded.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// Whether the guess ended the puzzle.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Win | Self::LossOutOfGuesses)
    }
}

/// Everything known about the session being played.
///
/// Owned by exactly one controller. The puzzle index counts puzzles started
/// in this session (1-based once a puzzle is running) and session results
/// never outnumber it.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    mode: GameMode,
    puzzle_index: usize,
    session_results: Vec<bool>,
    current_puzzle: Vehicle,
    guesses_remaining: u32,
    has_won: bool,
    guesses: Vec<GuessRecord>,
}

impl SessionState {
    /// Begin a fresh session in `mode` and start its first puzzle.
    pub fn start<R: Rng>(
        mode: GameMode,
        date: &PuzzleDate,
        catalog: &[Vehicle],
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        let puzzle = select_puzzle(mode, &date.to_string(), catalog, rng)?;
        let mut state = Self {
            mode,
            puzzle_index: 0,
            session_results: Vec::new(),
            current_puzzle: puzzle,
            guesses_remaining: mode.config().max_guesses,
            has_won: false,
            guesses: Vec::new(),
        };
        state.next_slot();
        debug!(%mode, puzzle = %state.current_puzzle.image_ref, "session started");
        Ok(state)
    }

    /// Rebuild today's daily session from a saved checkpoint.
    ///
    /// The puzzle is recomputed from `date`; the saved guess fields are taken
    /// as they are. Like any fresh session the index and results start from
    /// zero, so the resumed puzzle never enters the session results.
    pub fn resume_daily(
        date: &PuzzleDate,
        catalog: &[Vehicle],
        checkpoint: DailyCheckpoint,
    ) -> Result<Self, CatalogError> {
        let index = daily_index(&date.to_string(), catalog.len())?;
        let state = Self {
            mode: GameMode::Daily,
            puzzle_index: 0,
            session_results: Vec::new(),
            current_puzzle: catalog[index].clone(),
            guesses_remaining: checkpoint.guesses_remaining,
            has_won: checkpoint.has_won,
            guesses: checkpoint.guesses,
        };

        debug!(%date, status = state.status().name(), guesses = state.guesses.len(), "daily session resumed");
        Ok(state)
    }

    /// Move on to the next puzzle, wrapping into a new session after
    /// [`SESSION_SIZE`] puzzles.
    ///
    /// The new vehicle is chosen before anything is reset, so a failed
    /// selection leaves the session untouched.
    pub fn start_puzzle<R: Rng>(
        &mut self,
        date: &PuzzleDate,
        catalog: &[Vehicle],
        rng: &mut R,
    ) -> Result<(), CatalogError> {
        let puzzle = select_puzzle(self.mode, &date.to_string(), catalog, rng)?;
        self.next_slot();
        self.current_puzzle = puzzle;
        self.guesses_remaining = self.mode.config().max_guesses;
        self.has_won = false;
        self.guesses.clear();
        debug!(
            mode = %self.mode,
            index = self.puzzle_index,
            puzzle = %self.current_puzzle.image_ref,
            "puzzle started"
        );
        Ok(())
    }

    fn next_slot(&mut self) {
        if self.puzzle_index >= SESSION_SIZE {
            self.puzzle_index = 0;
            self.session_results.clear();
        }
        self.puzzle_index += 1;
    }

    /// Submit a guess against the current puzzle.
    ///
    /// Finished puzzles and incomplete input are rejected with no change.
    /// Otherwise the trimmed guess is appended and checked; reaching a final
    /// state records the puzzle's outcome.
    pub fn submit_guess(&mut self, make: &str, model: &str, year: &str) -> GuessOutcome {
        let status = self.status();
        if !Guard::accepting_guesses().check(&status) {
            return GuessOutcome::Rejected(Rejection::PuzzleFinished(status));
        }

        let require_year = self.mode.config().require_year;
        let guess = match validate_guess(make, model, year, require_year) {
            Validation::Success(guess) => guess,
            Validation::Failure(errors) => {
                return GuessOutcome::Rejected(Rejection::InvalidInput(
                    errors.iter().copied().collect(),
                ))
            }
        };

        let correct = self.current_puzzle.is_named_by(&guess, require_year);
        self.guesses.push(guess);

        if correct {
            self.has_won = true;
            self.record_outcome(true);
            return GuessOutcome::Win;
        }

        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        if self.guesses_remaining == 0 {
            self.record_outcome(false);
            GuessOutcome::LossOutOfGuesses
        } else {
            GuessOutcome::IncorrectContinue {
                remaining: self.guesses_remaining,
            }
        }
    }

    /// Append the current puzzle's outcome to the session results.
    ///
    /// Only the first call per puzzle has an effect; returns whether this one
    /// did.
    pub fn record_outcome(&mut self, is_win: bool) -> bool {
        if self.session_results.len() < self.puzzle_index {
            self.session_results.push(is_win);
            true
        } else {
            false
        }
    }

    /// The guess-relevant fields, as persisted for the daily puzzle.
    pub fn checkpoint(&self) -> DailyCheckpoint {
        DailyCheckpoint {
            guesses_remaining: self.guesses_remaining,
            has_won: self.has_won,
            guesses: self.guesses.clone(),
        }
    }

    pub fn status(&self) -> PuzzleStatus {
        PuzzleStatus::derive(self.has_won, self.guesses_remaining)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn puzzle_index(&self) -> usize {
        self.puzzle_index
    }

    pub fn session_results(&self) -> &[bool] {
        &self.session_results
    }

    pub fn current_puzzle(&self) -> &Vehicle {
        &self.current_puzzle
    }

    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Whether the last puzzle of the session has been started.
    pub fn is_last_puzzle(&self) -> bool {
        self.puzzle_index >= SESSION_SIZE
    }
}
