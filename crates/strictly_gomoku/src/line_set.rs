//! Deduplicated collections of winning lines.

use crate::{Cell, Grid, Line, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Every distinct winning line found for a position.
///
/// Lines are kept ordered so iteration and encoding are deterministic.
/// All members belong to the same player by construction. Encodes as a
/// plain list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineSet {
    lines: BTreeSet<Line>,
}

impl LineSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding one line.
    pub fn single(line: Line) -> Self {
        Self {
            lines: BTreeSet::from([line]),
        }
    }

    /// Adds a line, returning `false` if it was already present.
    pub fn insert(&mut self, line: Line) -> bool {
        self.lines.insert(line)
    }

    /// Checks membership.
    pub fn contains(&self, line: &Line) -> bool {
        self.lines.contains(line)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the set holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Checks whether any line runs through `cell`.
    pub fn covers_cell(&self, cell: Cell) -> bool {
        self.lines.iter().any(|line| line.covers_cell(cell))
    }

    /// Player owning the lines, or `None` for an empty set.
    pub fn owning_player(&self, grid: &Grid) -> Option<Player> {
        self.lines.first().map(|line| line.owning_player(grid))
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::collections::btree_set::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
