//! Five in a row - unified CLI
//!
//! Creates, plays and analyzes boards stored as JSON.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use cli::{Cli, Command};
use five_in_a_row::{AnalysisReport, GomokuConfig, board_to_json, load_board, save_board};
use std::path::Path;
use strictly_gomoku::{Board, Cell};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GomokuConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::New { size, x_on_even } => run_new(&config, size, x_on_even),
        Command::Show { board } => run_show(&board),
        Command::Analyze { board } => run_analyze(&board),
        Command::Play {
            board,
            x,
            y,
            in_place,
        } => run_play(&board, Cell::new(x, y), in_place),
    }
}

/// Print an empty board
#[instrument(skip(config))]
fn run_new(config: &GomokuConfig, size: Option<usize>, x_on_even: bool) -> Result<()> {
    let size = size.unwrap_or(*config.board_size());
    ensure!(size > 0, "Board size must be at least 1");

    let board = Board::new(size, x_on_even || *config.x_on_even());
    info!(size, "Created empty board");
    println!("{}", board_to_json(&board)?);
    Ok(())
}

/// Render a board and its status
#[instrument]
fn run_show(path: &Path) -> Result<()> {
    let board = load_board(path)?;
    print!("{}", board.display());
    println!(
        "Turn {} ({} to move): {}",
        board.turn(),
        board.mark_of(board.to_move()),
        board.status()
    );
    Ok(())
}

/// Print the analysis report
#[instrument]
fn run_analyze(path: &Path) -> Result<()> {
    let board = load_board(path)?;
    let report = AnalysisReport::analyze(&board);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to encode report")?
    );
    Ok(())
}

/// Apply a move
#[instrument]
fn run_play(path: &Path, cell: Cell, in_place: bool) -> Result<()> {
    let mut board = load_board(path)?;
    board
        .place(cell)
        .with_context(|| format!("Cannot play {}", cell))?;
    info!(status = %board.status(), "Move accepted");

    if in_place {
        save_board(path, &board)?;
    } else {
        println!("{}", board_to_json(&board)?);
    }
    Ok(())
}
