//! Conference Bingo - Unified CLI
//!
//! Plays the two bingo boards in a terminal UI, or inspects and edits them
//! from the command line.

#![warn(missing_docs)]

mod cli;

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use bingo_grid::CellId;
use clap::Parser;
use cli::{Cli, Command};
use conference_bingo::{
    BingoConfig, BingoService, FileStore, GameKind, MemoryStore, PersistenceAdapter,
    ToggleOutcome,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file written inside the data directory while the terminal UI runs.
const LOG_FILE_NAME: &str = "conference_bingo.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let command = cli.command.clone().unwrap_or(Command::Play);

    match command {
        Command::Play => run_play(&config),
        other => {
            initialize_cli_tracing();
            let mut service = open_service(&config)?;
            run_command(&mut service, other)
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<BingoConfig> {
    let mut config = BingoConfig::load_or_default(&cli.config)?;
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir.clone());
    }
    if cli.ephemeral {
        config = config.with_ephemeral(true);
    }
    Ok(config)
}

/// Builds the service over the configured store.
#[instrument(skip(config))]
fn open_service(config: &BingoConfig) -> Result<BingoService> {
    let persistence = if *config.ephemeral() {
        info!("Using in-memory store");
        PersistenceAdapter::new(MemoryStore::new())
    } else {
        info!(dir = %config.data_dir().display(), "Using file store");
        PersistenceAdapter::new(FileStore::new(config.data_dir()))
    };
    BingoService::open(persistence, config).context("Invalid locked cell configuration")
}

/// Runs the terminal UI.
fn run_play(config: &BingoConfig) -> Result<()> {
    initialize_tui_tracing(config);
    info!("Starting Conference Bingo terminal UI");
    let mut service = open_service(config)?;
    conference_bingo::run_tui(&mut service)
}

/// Runs one non-interactive command and prints its result.
#[instrument(skip(service))]
fn run_command(service: &mut BingoService, command: Command) -> Result<()> {
    match command {
        Command::Play => conference_bingo::run_tui(service),
        Command::Show { game } => {
            for game in selected_games(game) {
                print_board(service, game);
            }
            Ok(())
        }
        Command::Toggle { game, id } => {
            match service.toggle(game, CellId::new(id)) {
                ToggleOutcome::Toggled { completed } => {
                    let state = if completed { "done" } else { "not done" };
                    println!("{} cell {} is now {}", game.title(), id, state);
                }
                ToggleOutcome::Locked => println!("Cell {} is locked and cannot be toggled", id),
                ToggleOutcome::UnknownCell => println!("There is no cell {} on the board", id),
            }
            print_stats(service, game);
            Ok(())
        }
        Command::Reset { game } => {
            match game {
                Some(game) => service.reset(game),
                None => service.reset_all(),
            }
            for game in selected_games(game) {
                println!("{} reset", game.title());
            }
            Ok(())
        }
        Command::Stats => {
            for game in GameKind::ALL {
                print_stats(service, game);
            }
            Ok(())
        }
        Command::Name { name } => {
            if let Some(name) = name {
                service.submit_name(&name)?;
            }
            let session = service.session();
            if session.is_ready() {
                println!("{}", session.player_name());
            } else {
                println!("(no player name set)");
            }
            Ok(())
        }
        Command::Lines { game } => {
            let lines = service.slot(game).completed_lines();
            if lines.is_empty() {
                println!("{}: no complete lines yet", game.title());
            }
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// One game, or both in tab order.
fn selected_games(game: Option<GameKind>) -> Vec<GameKind> {
    match game {
        Some(game) => vec![game],
        None => GameKind::ALL.to_vec(),
    }
}

fn print_board(service: &BingoService, game: GameKind) {
    println!("== {} ==", game.title());
    println!("{}", service.grid(game).display());
    for cell in service.grid(game).cells() {
        let mark = if cell.is_completed() { 'x' } else { ' ' };
        println!("{:>3} [{}] {}", cell.id().get(), mark, cell.text());
    }
    print_stats(service, game);
    println!();
}

fn print_stats(service: &BingoService, game: GameKind) {
    let stats = service.stats(game);
    println!(
        "{}: {}/25 completed ({:.0}%), {} BINGO line(s)",
        game.title(),
        stats.completed_count(),
        stats.progress_percentage(),
        stats.bingo_count()
    );
    if let Some(message) = stats.bingo_message() {
        println!("{}", message);
    }
}

/// Logs to stderr for one-shot commands; quiet unless `RUST_LOG` says otherwise.
fn initialize_cli_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs to a file in the data directory; the terminal owns stdout and stderr.
fn initialize_tui_tracing(config: &BingoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,conference_bingo=debug,bingo_grid=debug"));

    let log_file = if *config.ephemeral() {
        None
    } else {
        std::fs::create_dir_all(config.data_dir())
            .and_then(|_| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(config.data_dir().join(LOG_FILE_NAME))
            })
            .ok()
    };

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init(),
    }
}
