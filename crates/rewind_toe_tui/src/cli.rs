//! Command-line interface for rewind_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Toe - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_toe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./rewind_toe.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file, overriding the settings file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,
    },

    /// Play a sequence of cells without a UI and print the result
    Replay {
        /// Cells to play in order, 0-8 row-major
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// Move number to jump to after playing
        #[arg(long)]
        jump: Option<usize>,

        /// List moves in descending order
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
