//! Command-line interface for conference_bingo.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use conference_bingo::GameKind;

/// Conference Bingo - two boards, one player, saved between sessions
#[derive(Parser, Debug)]
#[command(name = "conference_bingo")]
#[command(about = "Sustainability and learning bingo for conference attendees", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "conference_bingo.toml")]
    pub config: PathBuf,

    /// Override the directory boards and the player name are saved in
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print a board (or both) with its statistics
    Show {
        /// Game to show; both when omitted
        game: Option<GameKind>,
    },

    /// Toggle one cell and print the new statistics
    Toggle {
        /// Game the cell belongs to
        game: GameKind,

        /// Cell id (1-25)
        id: u8,
    },

    /// Reset a board (or both) to its seed
    Reset {
        /// Game to reset; both when omitted
        game: Option<GameKind>,
    },

    /// Print statistics for both boards
    Stats,

    /// Print the player name, or set it
    Name {
        /// New player name
        name: Option<String>,
    },

    /// List the complete lines on a board
    Lines {
        /// Game to inspect
        game: GameKind,
    },
}
