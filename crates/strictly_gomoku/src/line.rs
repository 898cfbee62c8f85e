//! Candidate five-cell runs.

use crate::{Cell, Grid, Player};
use serde::{Deserialize, Serialize};

/// Number of marks in a winning run.
pub const RUN_LENGTH: i32 = 5;

/// Direction of a run, in the order the search tries them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Direction {
    /// Along the row, `(1, 0)`.
    East,
    /// Down and right, `(1, 1)`.
    SouthEast,
    /// Down the column, `(0, 1)`.
    South,
    /// Up and right, `(1, -1)`.
    NorthEast,
}

impl Direction {
    /// Step vector `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::NorthEast => (1, -1),
        }
    }
}

/// A run of [`RUN_LENGTH`] cells starting at `anchor` and stepping in
/// `direction`.
///
/// Two lines are equal only when anchor and direction both match; the
/// same five cells walked from the other end form a different line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{anchor} {direction}")]
pub struct Line {
    anchor: Cell,
    direction: Direction,
}

impl Line {
    /// First cell of the run.
    pub fn anchor(self) -> Cell {
        self.anchor
    }

    /// Direction of the run.
    pub fn direction(self) -> Direction {
        self.direction
    }

    /// The five cells of the run, anchor first.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let delta = self.direction.delta();
        (0..RUN_LENGTH).map(move |i| self.anchor.step(delta, i))
    }

    /// Checks whether `cell` is one of the run's cells.
    ///
    /// Pure arithmetic; the cell need not lie on any grid.
    pub fn covers_cell(self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Checks whether all five cells are on the grid, occupied, and played
    /// by the player who played the anchor.
    pub fn is_winning_run(self, grid: &Grid) -> bool {
        let Some(anchor) = grid.get(self.anchor) else {
            return false;
        };
        let owner = Player::of_ply(anchor);
        self.cells().all(|cell| match grid.get(cell) {
            Some(ply) => ply != 0 && Player::of_ply(ply) == owner,
            None => false,
        })
    }

    /// Player owning the first occupied cell of the run.
    ///
    /// Meant for lines already reported as wins, where every occupied
    /// cell belongs to the same player.
    ///
    /// # Panics
    ///
    /// Panics if none of the run's cells is occupied; asking for the owner
    /// of such a line is a caller bug.
    pub fn owning_player(self, grid: &Grid) -> Player {
        let first = self
            .cells()
            .filter_map(|cell| grid.get(cell))
            .find(|&ply| ply != 0);
        match first {
            Some(ply) => Player::of_ply(ply),
            None => panic!("Line {} was not actually won: no occupied cell", self),
        }
    }
}
