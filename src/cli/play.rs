//! Interactive prompt loop for `cardle play`.

use super::display::{render_outcome, render_refusal, render_view};
use super::input::{parse_line, Input, HELP};
use anyhow::Context;
use cardle::catalog::{suggest, DEFAULT_SUGGESTION_LIMIT};
use cardle::checkpoint::KeyValueStore;
use cardle::core::GameMode;
use cardle::game::{AdvanceOutcome, Game};
use rand::Rng;
use std::io::{BufRead, Write};

pub fn run<K, R, I, O>(
    game: &mut Game<K, R>,
    mode: GameMode,
    input: I,
    out: &mut O,
) -> anyhow::Result<()>
where
    K: KeyValueStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let view = game
        .start_session(mode)
        .context("Could not start the game")?;
    writeln!(out, "{}", render_view(&view))?;
    writeln!(out, "Type :help for commands.")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let make_hint = game.view().and_then(|v| v.make_hint);

        match parse_line(&line, make_hint.as_deref()) {
            Input::Quit => break,
            Input::Empty => {}
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Unknown(text) => writeln!(out, "Unknown command: {text} (try :help)")?,
            Input::Hint(text) => writeln!(out, "{}", hints(game, &text))?,
            Input::Mode(mode) => {
                let view = game.start_session(mode)?;
                writeln!(out, "{}", render_view(&view))?;
            }
            Input::Next => match game.advance()? {
                AdvanceOutcome::Refused(refusal) => writeln!(out, "{}", render_refusal(refusal))?,
                AdvanceOutcome::NewSession => {
                    writeln!(out, "Starting a new session.")?;
                    show(game, out)?;
                }
                AdvanceOutcome::NextPuzzle => show(game, out)?,
            },
            Input::Guess { make, model, year } => {
                let outcome = game.submit_guess(&make, &model, &year)?;
                writeln!(out, "{}", render_outcome(&outcome))?;
                if outcome.is_final() {
                    show(game, out)?;
                    follow_up(game, out)?;
                }
            }
        }
        prompt(out)?;
    }
    Ok(())
}

fn prompt<O: Write>(out: &mut O) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn show<K: KeyValueStore, R: Rng, O: Write>(game: &Game<K, R>, out: &mut O) -> std::io::Result<()> {
    if let Some(view) = game.view() {
        writeln!(out, "{}", render_view(&view))?;
    }
    Ok(())
}

fn follow_up<K: KeyValueStore, R: Rng, O: Write>(
    game: &Game<K, R>,
    out: &mut O,
) -> std::io::Result<()> {
    let Some(view) = game.view() else {
        return Ok(());
    };
    if view.mode.is_daily() {
        writeln!(out, "Come back tomorrow for a new daily puzzle.")
    } else if view.is_session_over() {
        writeln!(out, "Session complete. Type :next for a new session.")
    } else {
        writeln!(out, "Type :next for the next puzzle.")
    }
}

/// Suggestions for `:hint`: makes, or models after `make /`.
fn hints<K: KeyValueStore, R: Rng>(game: &Game<K, R>, text: &str) -> String {
    let Some(catalog) = game.catalog() else {
        return "The catalog is not loaded.".to_string();
    };

    match text.split_once('/') {
        Some((make, prefix)) => {
            let models = catalog.model_options(make);
            join(suggest(prefix, &models, DEFAULT_SUGGESTION_LIMIT))
        }
        None => join(suggest(text, catalog.makes(), DEFAULT_SUGGESTION_LIMIT)),
    }
}

fn join(found: Vec<&str>) -> String {
    if found.is_empty() {
        "No suggestions.".to_string()
    } else {
        found.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardle::catalog::Catalog;
    use cardle::checkpoint::MemoryStore;
    use cardle::core::{PuzzleDate, PuzzleStatus};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn game() -> Game<MemoryStore, StdRng> {
        let date = PuzzleDate::from_ymd(2024, 1, 1).unwrap();
        let mut game = Game::new(MemoryStore::new(), StdRng::seed_from_u64(4)).with_date(date);
        game.catalog_loaded(Ok(Catalog::builtin()));
        game
    }

    fn play(game: &mut Game<MemoryStore, StdRng>, mode: GameMode, script: &str) -> String {
        let mut out = Vec::new();
        run(game, mode, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn daily_win_is_announced() {
        let mut game = game();
        let output = play(&mut game, GameMode::Daily, "Volkswagen / golf r\n:next\n:quit\n");

        assert!(output.contains("Correct! 🎉"));
        assert!(output.contains("Correct! VOLKSWAGEN GOLF R (2019)"));
        assert!(output.contains("Daily puzzle is once a day"));
    }

    #[test]
    fn blank_guess_asks_for_fields() {
        let mut game = game();
        let output = play(&mut game, GameMode::Daily, "Ford\n");

        assert!(output.contains("Please fill in: model."));
        assert_eq!(game.view().unwrap().guesses_remaining, 3);
    }

    #[test]
    fn hints_suggest_makes_and_models() {
        let mut game = game();
        let output = play(&mut game, GameMode::Easy, ":hint to\n:hint Ford / mus\n");

        assert!(output.contains("Toyota"));
        assert!(output.contains("Mustang GT"));
    }

    #[test]
    fn easy_mode_guesses_use_the_revealed_make() {
        let mut game = game();
        // Every built-in model under a wrong make; one of them is the answer.
        let script = "Lada / Mustang GT\nLada / RAV4\nLada / Golf R\n";

        let output = play(&mut game, GameMode::Easy, script);

        assert!(output.contains("Correct! 🎉"));
        assert_eq!(game.view().unwrap().status, PuzzleStatus::Won);
    }

    #[test]
    fn model_hints_come_from_the_named_make() {
        let game = game();

        assert_eq!(hints(&game, "Toyota / r"), "RAV4");
        assert_eq!(hints(&game, "Ford / zzz"), "No suggestions.");
        assert_eq!(hints(&game, "vo"), "Volkswagen");
    }

    #[test]
    fn failed_catalog_stops_the_game() {
        let mut game = Game::new(MemoryStore::new(), StdRng::seed_from_u64(4));
        game.catalog_loaded(Err(cardle::CatalogError::EmptyCatalog));

        let mut out = Vec::new();
        let result = run(&mut game, GameMode::Daily, Cursor::new(String::new()), &mut out);

        assert!(result.is_err());
    }
}
