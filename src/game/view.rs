//! Read-only snapshot of the game for the front-end.

use crate::core::{GameMode, GuessRecord, PuzzleStatus, State, Vehicle, SESSION_SIZE};
use crate::session::SessionState;
use rand::Rng;
use serde::Serialize;

/// Maximum distance, in percent, the clue focus drifts from the centre.
pub const CLUE_POS_JITTER: f64 = 15.0;

/// How the photo is cropped for the clue. Cosmetic only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClueFrame {
    pub zoom_percent: u32,
    /// Horizontal focus, percent of image width.
    pub focus_x: f64,
    /// Vertical focus, percent of image height.
    pub focus_y: f64,
}

impl ClueFrame {
    pub fn centered(zoom_percent: u32) -> Self {
        Self {
            zoom_percent,
            focus_x: 50.0,
            focus_y: 50.0,
        }
    }

    /// A fresh frame for a new puzzle: the mode's zoom, focus near centre.
    pub fn roll<R: Rng>(zoom_percent: u32, rng: &mut R) -> Self {
        let mut jitter = || 50.0 + rng.gen_range(-CLUE_POS_JITTER..=CLUE_POS_JITTER);
        let focus_x = jitter();
        let focus_y = jitter();
        Self {
            zoom_percent,
            focus_x,
            focus_y,
        }
    }

    /// The whole photo, shown once the puzzle is over.
    pub fn revealed() -> Self {
        Self::centered(100)
    }
}

/// One box of the five-puzzle scoreboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSlot {
    Won,
    Lost,
    InProgress,
    Pending,
}

/// Scoreboard slots for a session that has started `puzzle_index` puzzles.
pub fn scoreboard(results: &[bool], puzzle_index: usize) -> Vec<ScoreSlot> {
    (0..SESSION_SIZE)
        .map(|i| match results.get(i) {
            Some(true) => ScoreSlot::Won,
            Some(false) => ScoreSlot::Lost,
            None if i == results.len() && i < puzzle_index => ScoreSlot::InProgress,
            None => ScoreSlot::Pending,
        })
        .collect()
}

/// Everything the front-end needs to draw the current puzzle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PuzzleView {
    pub mode: GameMode,
    pub puzzle_index: usize,
    pub image_ref: String,
    pub frame: ClueFrame,
    pub status: PuzzleStatus,
    pub guesses_remaining: u32,
    pub max_guesses: u32,
    pub has_won: bool,
    pub guesses: Vec<GuessRecord>,
    pub session_results: Vec<bool>,
    /// Only for modes that keep score.
    pub scoreboard: Option<Vec<ScoreSlot>>,
    pub require_year: bool,
    /// Make handed to the player in modes that reveal it.
    pub make_hint: Option<String>,
    /// The answer, once the puzzle is over.
    pub answer: Option<Vehicle>,
}

impl PuzzleView {
    pub(crate) fn of(session: &SessionState, frame: ClueFrame) -> Self {
        let mode = session.mode();
        let config = mode.config();
        let status = session.status();
        let puzzle = session.current_puzzle();

        Self {
            mode,
            puzzle_index: session.puzzle_index(),
            image_ref: puzzle.image_ref.clone(),
            frame,
            status,
            guesses_remaining: session.guesses_remaining(),
            max_guesses: config.max_guesses,
            has_won: session.has_won(),
            guesses: session.guesses().to_vec(),
            session_results: session.session_results().to_vec(),
            scoreboard: mode
                .keeps_score()
                .then(|| scoreboard(session.session_results(), session.puzzle_index())),
            require_year: config.require_year,
            make_hint: config.reveals_make.then(|| puzzle.make.clone()),
            answer: status.is_final().then(|| puzzle.clone()),
        }
    }

    /// Whether the session is on its last puzzle, so advancing starts anew.
    pub fn is_session_over(&self) -> bool {
        self.status.is_final() && self.puzzle_index >= SESSION_SIZE
    }
}
