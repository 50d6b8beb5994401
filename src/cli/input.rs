//! Parsing of the lines typed at the `cardle play` prompt.

use cardle::core::GameMode;

/// What a prompt line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// `make / model [/ year]`, or just `model` when the make is handed out.
    Guess {
        make: String,
        model: String,
        year: String,
    },
    /// `:next`
    Next,
    /// `:mode <daily|easy|hard>`
    Mode(GameMode),
    /// `:hint <make prefix>` or `:hint <make> / <model prefix>`
    Hint(String),
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// Blank line
    Empty,
    /// Anything else starting with `:`
    Unknown(String),
}

pub const HELP: &str = "\
Type a guess as `make / model` (add `/ year` when asked).
Commands:
  :next           next puzzle once this one is over
  :mode <mode>    switch to daily, easy or hard
  :hint <text>    suggest makes, or `:hint <make> / <text>` for models
  :help           show this text
  :quit           leave";

/// Parse one prompt line. `make_hint` is the make pre-filled by the mode, if
/// any; it is then the make of every guess, and a line without a `/` is the
/// model alone.
pub fn parse_line(line: &str, make_hint: Option<&str>) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    if let Some(command) = line.strip_prefix(':') {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        return match name.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "n" | "next" => Input::Next,
            "h" | "help" => Input::Help,
            "hint" => Input::Hint(arg.to_string()),
            "mode" => match arg.parse() {
                Ok(mode) => Input::Mode(mode),
                Err(_) => Input::Unknown(line.to_string()),
            },
            _ => Input::Unknown(line.to_string()),
        };
    }

    let parts: Vec<&str> = line.split('/').map(str::trim).collect();
    if let Some(make) = make_hint {
        // A typed make is ignored; the mode hands it out.
        let rest = if parts.len() > 1 { &parts[1..] } else { &parts[..] };
        return Input::Guess {
            make: make.to_string(),
            model: rest.first().copied().unwrap_or_default().to_string(),
            year: rest.get(1).copied().unwrap_or_default().to_string(),
        };
    }

    match parts.as_slice() {
        [make, model] => Input::Guess {
            make: make.to_string(),
            model: model.to_string(),
            year: String::new(),
        },
        [make, model, year, ..] => Input::Guess {
            make: make.to_string(),
            model: model.to_string(),
            year: year.to_string(),
        },
        // Lone word without a make hint: let validation report the blank model.
        _ => Input::Guess {
            make: parts.first().copied().unwrap_or_default().to_string(),
            model: String::new(),
            year: String::new(),
        },
    }
}
