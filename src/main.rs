mod cli;

use anyhow::Context;
use cardle::catalog::Catalog;
use cardle::checkpoint::{self, FileStore};
use cardle::config::GameConfig;
use cardle::core::{GameMode, PuzzleDate, State};
use cardle::game::Game;
use cardle::selector::{daily_index, daily_seed};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardle", version, about = "Guess the car from a cropped photo")]
struct Cli {
    /// Catalog JSON file (overrides CARDLE_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Saved-state file (overrides CARDLE_STATE)
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively
    Play {
        /// daily, easy or hard
        #[arg(long, default_value = "daily")]
        mode: GameMode,
        /// Play the daily puzzle of another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<PuzzleDate>,
    },
    /// Show the saved daily state
    Status {
        /// Date to look up (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<PuzzleDate>,
        /// Print the raw JSON payload
        #[arg(long)]
        json: bool,
    },
    /// Show the daily seed and the catalog index it picks
    Seed {
        /// Date string, hashed as given
        date: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load().with_overrides(cli.catalog, cli.state);

    match cli.cmd {
        Command::Play { mode, date } => play(&config, mode, date),
        Command::Status { date, json } => status(&config, date, json),
        Command::Seed { date } => seed(&config, &date),
    }
}

fn play(config: &GameConfig, mode: GameMode, date: Option<PuzzleDate>) -> anyhow::Result<()> {
    let store = FileStore::new(&config.state_path);
    let mut game = Game::new(store, rand::thread_rng());
    if let Some(date) = date {
        game = game.with_date(date);
    }
    game.catalog_loaded(Catalog::load(&config.catalog_path));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::play::run(&mut game, mode, stdin.lock(), &mut stdout)
}

fn status(config: &GameConfig, date: Option<PuzzleDate>, json: bool) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(PuzzleDate::today);
    let store = FileStore::new(&config.state_path);

    let Some(saved) = checkpoint::load(&store, &date) else {
        println!("No daily puzzle played on {date}.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(());
    }

    println!("{date}: {}", saved.status().name());
    println!("Guesses remaining: {}", saved.guesses_remaining);
    for guess in &saved.guesses {
        println!("  {guess}");
    }
    Ok(())
}

fn seed(config: &GameConfig, date: &str) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog_path)
        .with_context(|| format!("loading {}", config.catalog_path.display()))?;
    let vehicles = catalog.vehicles();
    let index = daily_index(date, vehicles.len())?;

    println!("seed:  {}", daily_seed(date));
    println!("index: {index} of {}", vehicles.len());
    println!("car:   {}", vehicles[index]);
    Ok(())
}
