//! Error types for grid construction and move application.

use crate::{Cell, Ply};

/// Error raised when a grid's shape or contents break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[display("Grid has no cells")]
    Empty,

    /// A row's length differs from the first row's.
    #[display("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// The cell lies outside the grid.
    #[display("Cell {_0} is outside the grid")]
    OutOfBounds(Cell),

    /// The next ply number is zero.
    #[display("Turn counter must start at 1")]
    ZeroTurn,

    /// Two cells hold the same ply.
    #[display("Ply {_0} occupies more than one cell")]
    DuplicatePly(Ply),

    /// A ply below the turn counter is missing from the grid.
    #[display("Ply {_0} is missing from the grid")]
    MissingPly(Ply),

    /// A cell holds a ply at or beyond the turn counter.
    #[display("Cell {cell} holds ply {ply} but the next ply is {turn}")]
    PlyOutOfRange {
        /// Offending cell.
        cell: Cell,
        /// Ply found there.
        ply: Ply,
        /// Next ply to be played.
        turn: Ply,
    },
}

impl std::error::Error for GridError {}

/// Error that can occur when placing a mark on a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell lies outside the board.
    #[display("Cell {_0} is outside the board")]
    OutOfBounds(Cell),

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Cell),
}

impl std::error::Error for MoveError {}
