//! Text rendering of game views and outcomes.

use cardle::game::{AdvanceRefusal, PuzzleView, ScoreSlot};
use cardle::session::{GuessInputError, GuessOutcome, Rejection};
use cardle::PuzzleStatus;

fn slot_mark(slot: ScoreSlot) -> &'static str {
    match slot {
        ScoreSlot::Won => "✅",
        ScoreSlot::Lost => "❌",
        ScoreSlot::InProgress => "❓",
        ScoreSlot::Pending => "⬛",
    }
}

pub fn render_scoreboard(slots: &[ScoreSlot]) -> String {
    slots.iter().map(|s| slot_mark(*s)).collect::<Vec<_>>().join(" ")
}

fn guesses_word(n: u32) -> &'static str {
    if n == 1 {
        "guess"
    } else {
        "guesses"
    }
}

/// Full screen for the current puzzle.
pub fn render_view(view: &PuzzleView) -> String {
    let mut out = Vec::new();

    let mut title = format!("== {} mode", view.mode);
    if view.scoreboard.is_some() {
        title.push_str(&format!(" · puzzle {}/{}", view.puzzle_index, cardle::SESSION_SIZE));
    }
    title.push_str(" ==");
    out.push(title);

    if let Some(slots) = &view.scoreboard {
        out.push(render_scoreboard(slots));
    }

    out.push(format!(
        "Photo: images/{}  (zoom {}%, focus {:.1}% {:.1}%)",
        view.image_ref, view.frame.zoom_percent, view.frame.focus_x, view.frame.focus_y
    ));
    out.push(format!("Guesses remaining: {}", view.guesses_remaining));

    if let Some(make) = &view.make_hint {
        out.push(format!("Make: {make}"));
    }
    if view.require_year {
        out.push("A model year is required in this mode.".to_string());
    }

    if !view.guesses.is_empty() {
        out.push("Your guesses:".to_string());
        out.extend(view.guesses.iter().map(|g| format!("  {g}")));
    }

    if let Some(answer) = &view.answer {
        out.push(render_answer(view.status, answer));
    }

    out.join("\n")
}

fn render_answer(status: PuzzleStatus, answer: &cardle::Vehicle) -> String {
    let heading = if status == PuzzleStatus::Won {
        "Correct!"
    } else {
        "The answer was:"
    };
    format!(
        "{heading} {} {} ({})",
        answer.make.to_uppercase(),
        answer.model.to_uppercase(),
        answer.year
    )
}

fn input_error_field(error: &GuessInputError) -> &'static str {
    match error {
        GuessInputError::MissingMake => "make",
        GuessInputError::MissingModel => "model",
        GuessInputError::MissingYear => "year",
    }
}

/// One-line feedback for a submitted guess.
pub fn render_outcome(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Win => "Correct! 🎉".to_string(),
        GuessOutcome::IncorrectContinue { remaining } => format!(
            "Incorrect! {remaining} {} remaining.",
            guesses_word(*remaining)
        ),
        GuessOutcome::LossOutOfGuesses => "Out of guesses! The answer was revealed.".to_string(),
        GuessOutcome::Rejected(Rejection::PuzzleFinished(_)) => {
            "This puzzle is over. Type :next for another, or :mode to switch.".to_string()
        }
        GuessOutcome::Rejected(Rejection::InvalidInput(errors)) => {
            let fields: Vec<&str> = errors.iter().map(input_error_field).collect();
            format!("Please fill in: {}.", fields.join(", "))
        }
    }
}

pub fn render_refusal(refusal: AdvanceRefusal) -> &'static str {
    match refusal {
        AdvanceRefusal::PuzzleInProgress => "Finish this puzzle first.",
        AdvanceRefusal::DailyOncePerDay => "Daily puzzle is once a day. Play another mode!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoreboard_uses_one_mark_per_slot() {
        let rendered = render_scoreboard(&[
            ScoreSlot::Won,
            ScoreSlot::Lost,
            ScoreSlot::InProgress,
            ScoreSlot::Pending,
            ScoreSlot::Pending,
        ]);
        assert_eq!(rendered, "✅ ❌ ❓ ⬛ ⬛");
    }

    #[test]
    fn incorrect_outcome_pluralizes() {
        assert_eq!(
            render_outcome(&GuessOutcome::IncorrectContinue { remaining: 1 }),
            "Incorrect! 1 guess remaining."
        );
        assert_eq!(
            render_outcome(&GuessOutcome::IncorrectContinue { remaining: 4 }),
            "Incorrect! 4 guesses remaining."
        );
    }

    #[test]
    fn invalid_input_lists_fields() {
        let outcome = GuessOutcome::Rejected(Rejection::InvalidInput(vec![
            GuessInputError::MissingMake,
            GuessInputError::MissingModel,
        ]));
        assert_eq!(render_outcome(&outcome), "Please fill in: make, model.");
    }

    #[test]
    fn answer_is_upper_cased() {
        let answer = cardle::Vehicle::new("Toyota", "RAV4", "2018", "toyota_rav4_2018.jpg");
        assert_eq!(
            render_answer(PuzzleStatus::Lost, &answer),
            "The answer was: TOYOTA RAV4 (2018)"
        );
    }
}
