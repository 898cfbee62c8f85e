//! Board aggregate: grid, turn counter, symbol mapping and the winner
//! derived from them.

use crate::{
    Cell, Grid, GridError, Line, LineSet, Mark, MoveError, Player, Ply, Search, Snapshot,
    find_winning,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a position, derived from the board's winner set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No win is in sight yet.
    #[display("In progress")]
    InProgress,
    /// A completed line is on the board.
    #[display("Won by {_0}")]
    Won(Player),
    /// The player can no longer be stopped from completing a line.
    #[display("Forced win for {_0}")]
    Forced(Player),
    /// The board is full and nobody completed a line.
    #[display("Draw")]
    Draw,
}

/// A game of five in a row.
///
/// The winner is never trusted from storage: decoding checks the plies
/// and recomputes it, dropping any stored value, and every accepted
/// move calls [`Board::refresh_winner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct Board {
    /// Whether parity-0 (even) plies are drawn as X.
    x_on_even: bool,
    /// Plies per cell.
    tiles: Grid,
    /// Next ply to be played.
    turn: Ply,
    /// Lines won or forced, `None` while the game is open.
    winner: Option<LineSet>,
}

/// Encoded board as read from storage; any stored winner is ignored.
#[derive(Deserialize)]
struct StoredBoard {
    x_on_even: bool,
    tiles: Grid,
    turn: Ply,
}

impl TryFrom<StoredBoard> for Board {
    type Error = GridError;

    fn try_from(stored: StoredBoard) -> Result<Self, Self::Error> {
        let mut board = Self {
            x_on_even: stored.x_on_even,
            tiles: stored.tiles,
            turn: stored.turn,
            winner: None,
        };
        board.validate()?;
        board.refresh_winner();
        Ok(board)
    }
}

impl Board {
    /// Creates an empty square board.
    #[instrument]
    pub fn new(size: usize, x_on_even: bool) -> Self {
        Self {
            x_on_even,
            tiles: Grid::square(size),
            turn: 1,
            winner: None,
        }
    }

    /// Builds a board from rows of plies, playing next after the highest
    /// ply present.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the rows are empty or ragged.
    #[instrument(skip(rows))]
    pub fn from_tiles(rows: Vec<Vec<Ply>>, x_on_even: bool) -> Result<Self, GridError> {
        let tiles = Grid::from_rows(rows)?;
        let turn = tiles.highest_ply() + 1;
        let mut board = Self {
            x_on_even,
            tiles,
            turn,
            winner: None,
        };
        board.refresh_winner();
        Ok(board)
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.tiles
    }

    /// Next ply to be played.
    pub fn turn(&self) -> Ply {
        self.turn
    }

    /// Ply after the next one.
    pub fn next_turn(&self) -> Ply {
        self.turn + 1
    }

    /// Whether even plies are drawn as X.
    pub fn x_on_even(&self) -> bool {
        self.x_on_even
    }

    /// Player who makes the next ply.
    pub fn to_move(&self) -> Player {
        Player::of_ply(self.turn)
    }

    /// Checks whether it is `player`'s turn.
    pub fn is_turn_of(&self, player: Player) -> bool {
        self.to_move() == player
    }

    /// Symbol drawn for `player`.
    pub fn mark_of(&self, player: Player) -> Mark {
        Mark::for_player(player, self.x_on_even)
    }

    /// Symbol in `cell`, `None` if empty or off the board.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        self.tiles
            .get(cell)
            .filter(|&ply| ply != 0)
            .map(|ply| self.mark_of(Player::of_ply(ply)))
    }

    /// Grid and turn counter, detached from the board.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.tiles.clone(), self.turn)
    }

    /// Current winner set.
    pub fn winner(&self) -> Option<&LineSet> {
        self.winner.as_ref()
    }

    /// Player owning the winner set.
    pub fn winning_player(&self) -> Option<Player> {
        self.winner.as_ref()?.owning_player(&self.tiles)
    }

    /// Checks whether `cell` holds a mark that belongs to a winning line.
    pub fn is_winning_tile(&self, cell: Cell) -> bool {
        self.mark_at(cell).is_some()
            && self
                .winner
                .as_ref()
                .is_some_and(|winner| winner.covers_cell(cell))
    }

    /// Outcome derived from the winner set.
    pub fn status(&self) -> GameStatus {
        let Some(winner) = &self.winner else {
            return GameStatus::InProgress;
        };
        match winner.owning_player(&self.tiles) {
            None => GameStatus::Draw,
            Some(player) if winner.iter().any(|line| line.is_winning_run(&self.tiles)) => {
                GameStatus::Won(player)
            }
            Some(player) => GameStatus::Forced(player),
        }
    }

    /// Checks the grid against the turn counter.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the occupied cells are not exactly the
    /// plies `1..turn`, each once.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn validate(&self) -> Result<(), GridError> {
        self.tiles.validate_plies(self.turn)
    }

    /// Places the next ply at `cell` and recomputes the winner.
    ///
    /// Only bounds and occupancy are checked; turn order and game end are
    /// the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`].
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn place(&mut self, cell: Cell) -> Result<(), MoveError> {
        match self.tiles.get(cell) {
            None => return Err(MoveError::OutOfBounds(cell)),
            Some(0) => {}
            Some(_) => return Err(MoveError::Occupied(cell)),
        }

        self.tiles
            .set(cell, self.turn)
            .map_err(|_| MoveError::OutOfBounds(cell))?;
        self.turn += 1;
        self.refresh_winner();

        info!(%cell, status = %self.status(), "Move placed");
        Ok(())
    }

    /// Recomputes the winner set from the grid.
    ///
    /// A line already on the board takes precedence, so a full board
    /// holding a line reports that line rather than an empty set;
    /// otherwise the two-ply search decides.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn refresh_winner(&mut self) {
        self.winner = match find_winning(&self.tiles) {
            Some(line) => Some(LineSet::single(line)),
            None => Search::new(self.snapshot()).next_next_winning(),
        };
        debug!(winner = ?self.winner.as_ref().map(LineSet::len), "Winner refreshed");
    }

    /// Line completed on the board, if any.
    pub fn completed_line(&self) -> Option<Line> {
        find_winning(&self.tiles)
    }

    /// Formats the board as text: `X`, `O` or `.`, with winning marks
    /// in brackets.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (cell, _) in self.tiles.cells() {
            let symbol = self.mark_at(cell).map_or('.', Mark::symbol);
            if self.is_winning_tile(cell) {
                result.push('[');
                result.push(symbol);
                result.push(']');
            } else {
                result.push(' ');
                result.push(symbol);
                result.push(' ');
            }
            if cell.x as usize + 1 == self.tiles.width() {
                result.push('\n');
            }
        }
        result
    }
}
