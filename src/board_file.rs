//! Reading and writing boards as JSON files.

use derive_more::{Display, Error};
use std::path::Path;
use strictly_gomoku::Board;
use tracing::{debug, info, instrument};

/// Loads a board, checks its plies and recomputes the winner.
///
/// Any winner stored in the file is discarded.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, BoardFileError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| BoardFileError::new(format!("Failed to read board file: {}", e)))?;
    let board = parse_board(&content)?;
    info!(turn = board.turn(), "Board loaded");
    Ok(board)
}

/// Parses a board from JSON.
///
/// Decoding checks the plies and recomputes the winner.
#[instrument(skip(json))]
pub fn parse_board(json: &str) -> Result<Board, BoardFileError> {
    let board: Board = serde_json::from_str(json)
        .map_err(|e| BoardFileError::new(format!("Failed to parse board: {}", e)))?;
    debug!(status = %board.status(), "Board parsed");
    Ok(board)
}

/// Encodes a board as pretty-printed JSON.
#[instrument(skip(board))]
pub fn board_to_json(board: &Board) -> Result<String, BoardFileError> {
    serde_json::to_string_pretty(board)
        .map_err(|e| BoardFileError::new(format!("Failed to encode board: {}", e)))
}

/// Writes a board to `path`, replacing its contents.
#[instrument(skip(path, board), fields(path = %path.as_ref().display()))]
pub fn save_board(path: impl AsRef<Path>, board: &Board) -> Result<(), BoardFileError> {
    let json = board_to_json(board)?;
    std::fs::write(path.as_ref(), json)
        .map_err(|e| BoardFileError::new(format!("Failed to write board file: {}", e)))?;
    info!(turn = board.turn(), "Board saved");
    Ok(())
}

/// Board file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board file error: {} at {}:{}", message, file, line)]
pub struct BoardFileError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardFileError {
    /// Creates a new board file error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
