//! Command-line interface for five_in_a_row.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Five in a row - forced-win analysis for N-in-a-row boards
#[derive(Parser, Debug)]
#[command(name = "five_in_a_row")]
#[command(about = "Create, play and analyze five-in-a-row boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an empty board as JSON
    New {
        /// Side length (defaults to the configured size)
        #[arg(short, long)]
        size: Option<usize>,

        /// Draw even plies as X
        #[arg(long)]
        x_on_even: bool,
    },

    /// Render a board and its status
    Show {
        /// Board JSON file
        board: PathBuf,
    },

    /// Run the win searches and print a JSON report
    Analyze {
        /// Board JSON file
        board: PathBuf,
    },

    /// Place the next mark and print the updated board
    Play {
        /// Board JSON file
        board: PathBuf,

        /// Column of the cell
        x: i32,

        /// Row of the cell
        y: i32,

        /// Rewrite the board file instead of printing
        #[arg(long)]
        in_place: bool,
    },
}
