//! Rectangular grid of ply numbers.

use crate::{GridError, Ply};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Coordinates of a grid cell: `x` is the column, `y` the row.
///
/// Coordinates are signed so that line arithmetic can step off the
/// grid; such cells simply read as absent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Cell {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Cell {
    /// Cell reached by taking `steps` steps of `(dx, dy)` from here.
    pub fn step(self, (dx, dy): (i32, i32), steps: i32) -> Self {
        Self::new(self.x + steps * dx, self.y + steps * dy)
    }
}

// Row-major, matching the scan order of the search.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rectangular matrix of plies stored row-major.
///
/// Encodes as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Ply>>", into = "Vec<Vec<Ply>>")]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Ply>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![0; width * height],
        }
    }

    /// Creates an empty square grid.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Builds a grid from rows of plies.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for a grid without cells and
    /// [`GridError::Ragged`] when rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Ply>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            tiles.extend(values);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Ply stored at `cell`, or `None` when it lies outside the grid.
    pub fn get(&self, cell: Cell) -> Option<Ply> {
        self.index(cell).map(|i| self.tiles[i])
    }

    /// Writes `ply` into `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the cell lies outside the grid.
    pub fn set(&mut self, cell: Cell, ply: Ply) -> Result<(), GridError> {
        let tile = self.tile_mut(cell).ok_or(GridError::OutOfBounds(cell))?;
        *tile = ply;
        Ok(())
    }

    pub(crate) fn tile_mut(&mut self, cell: Cell) -> Option<&mut Ply> {
        self.index(cell).map(|i| &mut self.tiles[i])
    }

    /// Checks if `cell` is inside the grid and empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Some(0)
    }

    /// All cells with their plies in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Ply)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &ply)| (self.cell_at(i), ply))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&(_, ply)| ply == 0)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Highest ply on the grid, `0` when the grid is empty.
    pub fn highest_ply(&self) -> Ply {
        self.tiles.iter().copied().max().unwrap_or(0)
    }

    /// Copies the grid out as a list of rows.
    pub fn rows(&self) -> Vec<Vec<Ply>> {
        self.tiles
            .chunks(self.width.max(1))
            .map(<[Ply]>::to_vec)
            .collect()
    }

    /// Checks that the occupied cells hold exactly the plies `1..turn`,
    /// each once.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning row-major.
    pub fn validate_plies(&self, turn: Ply) -> Result<(), GridError> {
        if turn == 0 {
            return Err(GridError::ZeroTurn);
        }

        let mut occupied = 0;
        for (cell, ply) in self.cells().filter(|&(_, ply)| ply != 0) {
            if ply >= turn {
                return Err(GridError::PlyOutOfRange { cell, ply, turn });
            }
            occupied += 1;
        }

        // Plies 1..=occupied must each appear once; sized by the grid,
        // never by the turn counter.
        let mut seen = vec![false; occupied + 1];
        for (_, ply) in self.cells().filter(|&(_, ply)| ply != 0) {
            let Some(slot) = seen.get_mut(ply as usize) else {
                continue;
            };
            if std::mem::replace(slot, true) {
                return Err(GridError::DuplicatePly(ply));
            }
        }

        let missing = (1..=occupied)
            .find(|&ply| !seen[ply])
            .or((turn as usize > occupied + 1).then_some(occupied + 1));
        match missing {
            Some(ply) => Err(GridError::MissingPly(ply as Ply)),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<Vec<Ply>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Ply>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Ply>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}
