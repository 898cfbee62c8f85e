//! Forced-win detection.
//!
//! Three layered scans over a position:
//!
//! - [`find_winning`]: is a five-mark line already on the grid?
//! - [`find_next_winning`]: can the player to move complete one now?
//! - [`find_next_next_winning`]: does one move win outright, or does every
//!   move leave a completion for the following ply?
//!
//! Lookahead plays candidate plies into a private working copy through
//! [`Placement`] guards, which undo the write on drop. The caller's
//! position is never touched.

use crate::{Cell, Direction, Grid, Line, LineSet, Player, Ply};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// A grid together with the next ply to be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    grid: Grid,
    turn: Ply,
}

impl Snapshot {
    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The next ply number.
    pub fn turn(&self) -> Ply {
        self.turn
    }

    /// Player who makes the next ply.
    pub fn to_move(&self) -> Player {
        Player::of_ply(self.turn)
    }
}

/// Scoped placement of the next ply into an empty cell.
///
/// Writing happens on construction; dropping the guard empties the cell
/// and rewinds the turn counter, on every exit path.
struct Placement<'a> {
    snapshot: &'a mut Snapshot,
    cell: Cell,
}

impl<'a> Placement<'a> {
    /// Plays the next ply at `cell`, or returns `None` if the cell is
    /// off the grid or occupied.
    fn new(snapshot: &'a mut Snapshot, cell: Cell) -> Option<Self> {
        let turn = snapshot.turn;
        let tile = snapshot.grid.tile_mut(cell).filter(|tile| **tile == 0)?;
        *tile = turn;
        snapshot.turn += 1;
        Some(Self { snapshot, cell })
    }
}

impl Deref for Placement<'_> {
    type Target = Snapshot;

    fn deref(&self) -> &Snapshot {
        &*self.snapshot
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Snapshot {
        &mut *self.snapshot
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.snapshot.turn -= 1;
        if let Some(tile) = self.snapshot.grid.tile_mut(self.cell) {
            *tile = 0;
        }
    }
}

/// Lookahead over a private copy of a position.
#[derive(Debug, Clone)]
pub struct Search {
    working: Snapshot,
}

impl Search {
    /// Takes ownership of `snapshot` as the working copy.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { working: snapshot }
    }

    /// The working copy. Between calls it always equals the position the
    /// search was created with.
    pub fn working(&self) -> &Snapshot {
        &self.working
    }

    /// Releases the working copy.
    pub fn into_snapshot(self) -> Snapshot {
        self.working
    }

    /// Line already completed on the working grid.
    pub fn winning(&self) -> Option<Line> {
        find_winning(&self.working.grid)
    }

    /// Line the player to move can complete with one placement.
    pub fn next_winning(&mut self) -> Option<Line> {
        next_winning(&mut self.working)
    }

    /// Immediate or fully forced wins, see [`find_next_next_winning`].
    pub fn next_next_winning(&mut self) -> Option<LineSet> {
        next_next_winning(&mut self.working)
    }
}

/// Finds a completed line on the grid.
///
/// Anchors are scanned row-major over occupied cells and directions in
/// [`Direction`] order; the first winning line is returned, so the
/// answer is stable when several lines are complete.
pub fn find_winning(grid: &Grid) -> Option<Line> {
    grid.cells()
        .filter(|&(_, ply)| ply != 0)
        .flat_map(|(cell, _)| Direction::iter().map(move |direction| Line::new(cell, direction)))
        .find(|line| line.is_winning_run(grid))
}

/// Finds an empty cell where the player to move completes a line.
///
/// Cells are tried row-major and the first completed line is returned.
#[instrument(skip(snapshot), fields(turn = snapshot.turn()))]
pub fn find_next_winning(snapshot: &Snapshot) -> Option<Line> {
    Search::new(snapshot.clone()).next_winning()
}

/// Finds wins reachable within two plies.
///
/// Returns a single line as soon as one placement completes a line for
/// the player to move. Otherwise returns the lines completed by the
/// following ply, but only when every empty cell leads to one; a single
/// unresolved cell yields `None`. A grid with no empty cells yields an
/// empty set.
#[instrument(skip(snapshot), fields(turn = snapshot.turn()))]
pub fn find_next_next_winning(snapshot: &Snapshot) -> Option<LineSet> {
    let result = Search::new(snapshot.clone()).next_next_winning();
    debug!(lines = ?result.as_ref().map(LineSet::len), "Two-ply search finished");
    result
}

fn next_winning(snapshot: &mut Snapshot) -> Option<Line> {
    for cell in snapshot.grid.empty_cells() {
        let Some(placed) = Placement::new(snapshot, cell) else {
            continue;
        };
        if let Some(line) = find_winning(&placed.grid) {
            trace!(%cell, %line, "Placement completes a line");
            return Some(line);
        }
    }
    None
}

fn next_next_winning(snapshot: &mut Snapshot) -> Option<LineSet> {
    let mut winners = LineSet::new();
    let mut all_resolved = true;

    for cell in snapshot.grid.empty_cells() {
        let Some(mut placed) = Placement::new(snapshot, cell) else {
            continue;
        };

        if let Some(line) = find_winning(&placed.grid) {
            debug!(%cell, %line, "Immediate win available");
            return Some(LineSet::single(line));
        }

        match next_winning(&mut placed) {
            Some(line) => {
                winners.insert(line);
            }
            None => {
                trace!(%cell, "Branch has no forced completion");
                all_resolved = false;
            }
        }
    }

    all_resolved.then_some(winners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(rows: Vec<Vec<Ply>>) -> Snapshot {
        let grid = Grid::from_rows(rows).unwrap();
        let turn = grid.highest_ply() + 1;
        Snapshot::new(grid, turn)
    }

    #[test]
    fn test_placement_restores_on_drop() {
        let mut position = snapshot(vec![vec![1, 0], vec![0, 2]]);
        let original = position.clone();
        {
            let placed = Placement::new(&mut position, Cell::new(1, 0)).unwrap();
            assert_eq!(placed.grid().get(Cell::new(1, 0)), Some(3));
            assert_eq!(placed.turn(), 4);
        }
        assert_eq!(position, original);
    }

    #[test]
    fn test_placement_nests() {
        let mut position = snapshot(vec![vec![1, 0, 0]]);
        let original = position.clone();
        {
            let mut outer = Placement::new(&mut position, Cell::new(1, 0)).unwrap();
            {
                let inner = Placement::new(&mut outer, Cell::new(2, 0)).unwrap();
                assert_eq!(inner.grid().rows(), vec![vec![1, 2, 3]]);
                assert_eq!(inner.turn(), 4);
            }
            assert_eq!(outer.grid().rows(), vec![vec![1, 2, 0]]);
            assert_eq!(outer.turn(), 3);
        }
        assert_eq!(position, original);
    }

    #[test]
    fn test_placement_rejects_occupied_and_outside() {
        let mut position = snapshot(vec![vec![1, 0]]);
        assert!(Placement::new(&mut position, Cell::new(0, 0)).is_none());
        assert!(Placement::new(&mut position, Cell::new(2, 0)).is_none());
        assert_eq!(position.turn(), 2);
    }

    #[test]
    fn test_find_winning_none_on_empty_grid() {
        assert_eq!(find_winning(&Grid::square(7)), None);
    }

    #[test]
    fn test_find_winning_prefers_direction_order() {
        // Anchor (0, 0) completes both a row and a column; the row is
        // tried first.
        let grid = Grid::from_rows(vec![
            vec![1, 3, 5, 7, 9],
            vec![11, 2, 4, 6, 0],
            vec![13, 8, 10, 0, 0],
            vec![15, 12, 0, 0, 0],
            vec![17, 14, 16, 0, 0],
        ])
        .unwrap();
        assert_eq!(
            find_winning(&grid),
            Some(Line::new(Cell::new(0, 0), Direction::East))
        );
    }

    #[test]
    fn test_find_winning_prefers_row_major_anchor() {
        let grid = Grid::from_rows(vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 2, 4, 6, 8, 10],
            vec![1, 3, 5, 7, 9, 0],
        ])
        .unwrap();
        assert_eq!(
            find_winning(&grid),
            Some(Line::new(Cell::new(1, 1), Direction::East))
        );
    }

    #[test]
    fn test_search_working_copy_unchanged() {
        let position = snapshot(vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 8, 0, 0, 0, 0],
            vec![1, 3, 4, 7, 9, 0],
            vec![0, 0, 0, 2, 0, 0],
            vec![0, 0, 0, 0, 12, 0],
            vec![0, 0, 0, 13, 0, 0],
        ]);
        let mut search = Search::new(position.clone());
        assert!(search.next_winning().is_some());
        assert_eq!(search.working(), &position);
        assert!(search.next_next_winning().is_some());
        assert_eq!(search.into_snapshot(), position);
    }

    #[test]
    fn test_next_winning_none_without_threat() {
        let position = snapshot(vec![vec![1, 0, 0], vec![0, 2, 0]]);
        assert_eq!(find_next_winning(&position), None);
    }

    #[test]
    fn test_full_grid_without_line_is_empty_set() {
        let position = snapshot(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(find_next_next_winning(&position), Some(LineSet::new()));
    }
}
