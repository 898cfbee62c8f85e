//! Five in a row - board analysis front end
//!
//! Thin layer over [`strictly_gomoku`] that keeps boards in JSON files
//! and reports what the forced-win search finds.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for new boards and logging
//! - **Board files**: JSON encoding with validation on load
//! - **Report**: every search layer for one position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_file;
mod config;
mod report;

pub use board_file::{BoardFileError, board_to_json, load_board, parse_board, save_board};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GomokuConfig};
pub use report::AnalysisReport;
