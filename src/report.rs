//! Analysis report for a board.

use serde::Serialize;
use strictly_gomoku::{Board, GameStatus, Line, LineSet, Player, Ply, Search, find_winning};
use tracing::instrument;

/// Results of every search layer for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Next ply to be played.
    pub turn: Ply,
    /// Player making the next ply.
    pub to_move: Player,
    /// Line already completed on the board.
    pub completed: Option<Line>,
    /// Line the player to move can complete now.
    pub immediate: Option<Line>,
    /// Outcome of the two-ply search.
    pub forced: Option<LineSet>,
    /// Derived game status.
    pub status: GameStatus,
}

impl AnalysisReport {
    /// Runs all searches against `board`.
    #[instrument(skip(board), fields(turn = board.turn()))]
    pub fn analyze(board: &Board) -> Self {
        let mut search = Search::new(board.snapshot());
        Self {
            turn: board.turn(),
            to_move: board.to_move(),
            completed: find_winning(board.grid()),
            immediate: search.next_winning(),
            forced: search.next_next_winning(),
            status: board.status(),
        }
    }
}
