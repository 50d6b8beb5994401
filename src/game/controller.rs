//! The controller that owns the session and does its side effects.

use super::view::{ClueFrame, PuzzleView};
use crate::catalog::{Catalog, CatalogError};
use crate::checkpoint::{self, KeyValueStore};
use crate::core::{GameMode, Guard, PuzzleDate, State};
use crate::session::{GuessOutcome, SessionState};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

/// Whether the catalog has arrived.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

impl State for LoadPhase {
    fn name(&self) -> &str {
        match self {
            Self::Loading => "Loading",
            Self::Ready => "Ready",
            Self::Failed => "Failed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Errors returned by controller actions.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("The car catalog is still loading")]
    NotReady,

    #[error("The car catalog could not be loaded: {0}")]
    CatalogUnavailable(String),

    #[error("No game mode has been started")]
    NoSession,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Why `advance` did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceRefusal {
    /// The current puzzle still takes guesses.
    PuzzleInProgress,
    /// The daily puzzle cannot be replayed.
    DailyOncePerDay,
}

/// Result of an `advance` action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextPuzzle,
    NewSession,
    Refused(AdvanceRefusal),
}

/// Single owner of the game.
///
/// Starts in [`LoadPhase::Loading`] and refuses every action until
/// [`Game::catalog_loaded`] has been called. A failed load is final.
pub struct Game<K: KeyValueStore, R: Rng> {
    phase: LoadPhase,
    catalog: Option<Catalog>,
    failure: Option<String>,
    store: K,
    rng: R,
    date: PuzzleDate,
    session: Option<SessionState>,
    frame: ClueFrame,
}

impl<K: KeyValueStore, R: Rng> Game<K, R> {
    /// A controller waiting for its catalog, dated today (UTC).
    pub fn new(store: K, rng: R) -> Self {
        Self {
            phase: LoadPhase::Loading,
            catalog: None,
            failure: None,
            store,
            rng,
            date: PuzzleDate::today(),
            session: None,
            frame: ClueFrame::revealed(),
        }
    }

    /// Override the calendar date used for the daily puzzle.
    pub fn with_date(mut self, date: PuzzleDate) -> Self {
        self.date = date;
        self
    }

    /// Hand over the result of loading the catalog.
    ///
    /// Only the first call counts; the phase never leaves `Ready` or
    /// `Failed`.
    pub fn catalog_loaded(&mut self, result: Result<Catalog, CatalogError>) -> LoadPhase {
        if self.phase.is_final() {
            warn!(phase = self.phase.name(), "catalog already settled, ignoring");
            return self.phase;
        }
        match result {
            Ok(catalog) => {
                info!(vehicles = catalog.vehicles().len(), "game ready");
                self.catalog = Some(catalog);
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                error!(error = %e, "failed to load car catalog");
                self.failure = Some(e.to_string());
                self.phase = LoadPhase::Failed;
            }
        }
        self.phase
    }

    fn ensure_ready(&self) -> Result<(), GameError> {
        match self.phase {
            LoadPhase::Ready => Ok(()),
            LoadPhase::Loading => Err(GameError::NotReady),
            LoadPhase::Failed => Err(GameError::CatalogUnavailable(
                self.failure.clone().unwrap_or_default(),
            )),
        }
    }

    /// Start (or restart) `mode`, replacing any running session.
    ///
    /// Daily mode resumes today's saved state when there is one.
    pub fn start_session(&mut self, mode: GameMode) -> Result<PuzzleView, GameError> {
        self.ensure_ready()?;
        let catalog = self.catalog.as_ref().ok_or(GameError::NotReady)?;

        let resumed = if mode.is_daily() {
            checkpoint::load(&self.store, &self.date)
        } else {
            None
        };
        let session = match resumed {
            Some(saved) => SessionState::resume_daily(&self.date, catalog.vehicles(), saved)?,
            None => SessionState::start(mode, &self.date, catalog.vehicles(), &mut self.rng)?,
        };

        self.frame = if session.status().is_final() {
            ClueFrame::revealed()
        } else {
            ClueFrame::roll(mode.config().zoom_percent, &mut self.rng)
        };
        info!(
            %mode,
            date = %self.date,
            status = session.status().name(),
            "mode started"
        );
        let view = PuzzleView::of(&session, self.frame);
        self.session = Some(session);
        Ok(view)
    }

    /// Submit a guess to the running puzzle.
    ///
    /// Accepted daily guesses are saved straight away; a failing store is
    /// logged and play continues from memory.
    pub fn submit_guess(
        &mut self,
        make: &str,
        model: &str,
        year: &str,
    ) -> Result<GuessOutcome, GameError> {
        self.ensure_ready()?;
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;

        let outcome = session.submit_guess(make, model, year);
        if !outcome.is_accepted() {
            return Ok(outcome);
        }

        if session.mode().is_daily() {
            if let Err(e) = checkpoint::save(&mut self.store, &self.date, &session.checkpoint()) {
                warn!(error = %e, "could not save daily state");
            }
        }
        if outcome.is_final() {
            self.frame = ClueFrame::revealed();
            info!(
                mode = %session.mode(),
                status = session.status().name(),
                guesses = session.guesses().len(),
                "puzzle finished"
            );
        }
        Ok(outcome)
    }

    /// Leave a finished puzzle for the next one.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, GameError> {
        self.ensure_ready()?;
        let catalog = self.catalog.as_ref().ok_or(GameError::NotReady)?;
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;

        if !Guard::finished().check(&session.status()) {
            return Ok(AdvanceOutcome::Refused(AdvanceRefusal::PuzzleInProgress));
        }
        if session.mode().is_daily() {
            return Ok(AdvanceOutcome::Refused(AdvanceRefusal::DailyOncePerDay));
        }

        let wraps = session.is_last_puzzle();
        session.start_puzzle(&self.date, catalog.vehicles(), &mut self.rng)?;
        self.frame = ClueFrame::roll(session.mode().config().zoom_percent, &mut self.rng);

        Ok(if wraps {
            AdvanceOutcome::NewSession
        } else {
            AdvanceOutcome::NextPuzzle
        })
    }

    /// Snapshot of the running puzzle, if a mode has been started.
    pub fn view(&self) -> Option<PuzzleView> {
        self.session
            .as_ref()
            .map(|session| PuzzleView::of(session, self.frame))
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn date(&self) -> &PuzzleDate {
        &self.date
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
