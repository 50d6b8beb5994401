//! Guess input validation using Validation.
//!
//! Every problem with a submitted guess is collected in one pass, so the
//! front-end can flag the make, model and year fields together instead of
//! one at a time.

use crate::core::GuessRecord;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A required guess field that was left blank.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GuessInputError {
    #[error("make is required")]
    MissingMake,

    #[error("model is required")]
    MissingModel,

    #[error("year is required in this mode")]
    MissingYear,
}

/// Outcome of validating raw guess input.
pub type GuessValidation = Validation<GuessRecord, NonEmptyVec<GuessInputError>>;

fn required(value: &str, error: GuessInputError) -> Validation<(), NonEmptyVec<GuessInputError>> {
    if value.is_empty() {
        Validation::fail(error)
    } else {
        Validation::success(())
    }
}

/// Trim the raw fields and check that every required one is present.
///
/// On success the trimmed record is returned, ready to be appended.
pub fn validate_guess(make: &str, model: &str, year: &str, require_year: bool) -> GuessValidation {
    let record = GuessRecord::trimmed(make, model, year);

    let mut checks = vec![
        required(&record.make, GuessInputError::MissingMake),
        required(&record.model, GuessInputError::MissingModel),
    ];
    if require_year {
        checks.push(required(&record.year, GuessInputError::MissingYear));
    }

    Validation::all_vec(checks).map(move |_| record)
}
