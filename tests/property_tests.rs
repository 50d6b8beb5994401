//! Property-based tests for the selector, the session state machine and the
//! daily checkpoint.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use cardle::catalog::builtin_vehicles;
use cardle::checkpoint::{self, DailyCheckpoint, MemoryStore};
use cardle::core::{GameMode, GuessRecord, PuzzleDate, PuzzleStatus, State};
use cardle::selector::{daily_index, daily_seed, select_puzzle};
use cardle::session::{GuessOutcome, SessionState};
use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn arbitrary_mode()(variant in 0..3u8) -> GameMode {
        match variant {
            0 => GameMode::Daily,
            1 => GameMode::Easy,
            _ => GameMode::Hard,
        }
    }
}

prop_compose! {
    fn arbitrary_date()(days in 0i64..40_000) -> PuzzleDate {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        PuzzleDate::new(epoch + chrono::Duration::days(days))
    }
}

prop_compose! {
    /// A guess naming one of the built-in cars, or a car that is never in it.
    fn arbitrary_guess()(pick in 0..4usize, year in prop::option::of(1990u32..2030)) -> (String, String, String) {
        let (make, model) = match builtin_vehicles().get(pick) {
            Some(v) => (v.make.clone(), v.model.clone()),
            None => ("Lada".to_string(), "Niva".to_string()),
        };
        (make, model, year.map(|y| y.to_string()).unwrap_or_default())
    }
}

prop_compose! {
    fn arbitrary_checkpoint()(
        guesses_remaining in 0u32..=3,
        has_won in any::<bool>(),
        guesses in prop::collection::vec(("[A-Za-z ]{1,12}", "[A-Za-z0-9 ]{1,12}"), 0..4),
    ) -> DailyCheckpoint {
        DailyCheckpoint {
            guesses_remaining,
            has_won,
            guesses: guesses
                .into_iter()
                .map(|(make, model)| GuessRecord { make, model, year: String::new() })
                .collect(),
        }
    }
}

proptest! {
    #[test]
    fn daily_seed_is_deterministic(input in ".*") {
        prop_assert_eq!(daily_seed(&input), daily_seed(&input));
    }

    #[test]
    fn daily_index_is_in_range(input in ".*", len in 1usize..100) {
        let index = daily_index(&input, len).unwrap();
        prop_assert!(index < len);
    }

    #[test]
    fn daily_pick_ignores_the_rng(date in arbitrary_date(), a in any::<u64>(), b in any::<u64>()) {
        let catalog = builtin_vehicles();
        let date = date.to_string();
        let first = select_puzzle(GameMode::Daily, &date, &catalog, &mut StdRng::seed_from_u64(a)).unwrap();
        let second = select_puzzle(GameMode::Daily, &date, &catalog, &mut StdRng::seed_from_u64(b)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn guesses_remaining_stays_within_limits(
        mode in arbitrary_mode(),
        date in arbitrary_date(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(arbitrary_guess(), 0..10),
    ) {
        let catalog = builtin_vehicles();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = SessionState::start(mode, &date, &catalog, &mut rng).unwrap();
        let max = mode.config().max_guesses;

        for (make, model, year) in &guesses {
            session.submit_guess(make, model, year);
            prop_assert!(session.guesses_remaining() <= max);
            prop_assert!(session.guesses().len() as u32 <= max);
        }
    }

    #[test]
    fn finished_puzzle_ignores_further_guesses(
        mode in arbitrary_mode(),
        date in arbitrary_date(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(arbitrary_guess(), 1..10),
    ) {
        let catalog = builtin_vehicles();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = SessionState::start(mode, &date, &catalog, &mut rng).unwrap();

        for (make, model, year) in &guesses {
            let before = session.checkpoint();
            let was_final = session.status().is_final();
            let outcome = session.submit_guess(make, model, year);

            if was_final {
                prop_assert!(matches!(outcome, GuessOutcome::Rejected(_)));
                prop_assert_eq!(session.checkpoint(), before);
            }
        }
    }

    #[test]
    fn winning_is_final_and_recorded_once(
        mode in arbitrary_mode(),
        date in arbitrary_date(),
        seed in any::<u64>(),
    ) {
        let catalog = builtin_vehicles();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = SessionState::start(mode, &date, &catalog, &mut rng).unwrap();
        let answer = session.current_puzzle().clone();

        let outcome = session.submit_guess(&answer.make, &answer.model, &answer.year);

        prop_assert_eq!(outcome, GuessOutcome::Win);
        prop_assert_eq!(session.status(), PuzzleStatus::Won);
        prop_assert_eq!(session.guesses_remaining(), mode.config().max_guesses);
        prop_assert!(!session.record_outcome(true));
        prop_assert_eq!(session.session_results(), &[true][..]);
    }

    #[test]
    fn record_outcome_is_idempotent(
        date in arbitrary_date(),
        seed in any::<u64>(),
        first in any::<bool>(),
        second in any::<bool>(),
    ) {
        let catalog = builtin_vehicles();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = SessionState::start(GameMode::Easy, &date, &catalog, &mut rng).unwrap();

        prop_assert!(session.record_outcome(first));
        prop_assert!(!session.record_outcome(second));
        prop_assert_eq!(session.session_results(), &[first][..]);
    }

    #[test]
    fn checkpoint_survives_the_store(date in arbitrary_date(), saved in arbitrary_checkpoint()) {
        let mut store = MemoryStore::new();

        checkpoint::save(&mut store, &date, &saved).unwrap();

        prop_assert_eq!(checkpoint::load(&store, &date), Some(saved));
    }

    #[test]
    fn status_finality_matches_fields(has_won in any::<bool>(), remaining in 0u32..=5) {
        let status = PuzzleStatus::derive(has_won, remaining);
        prop_assert_eq!(status.is_final(), has_won || remaining == 0);
        prop_assert_eq!(status.is_error(), status == PuzzleStatus::Lost);
    }
}
