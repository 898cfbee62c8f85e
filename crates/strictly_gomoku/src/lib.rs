//! Pure five-in-a-row game logic.
//!
//! Two players alternate placing marks on a rectangular grid; the first
//! to line up five in a row, column or diagonal wins. Each cell stores
//! the ply that filled it (`0` for empty), so the grid alone tells who
//! played where and in which order.
//!
//! # Architecture
//!
//! - **Grid**: row-major matrix of plies
//! - **Line**: anchor cell plus direction, spanning five cells
//! - **LineSet**: deduplicated winning lines of one player
//! - **Search**: completed-line scan, one-ply and two-ply lookahead
//! - **Board**: grid, turn counter and the winner derived from them
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Board, Cell, GameStatus, Player};
//!
//! let mut board = Board::new(15, false);
//! board.place(Cell::new(7, 7)).unwrap();
//! assert_eq!(board.to_move(), Player::Second);
//! assert_eq!(board.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod grid;
mod line;
mod line_set;
mod player;
mod search;

pub use board::{Board, GameStatus};
pub use error::{GridError, MoveError};
pub use grid::{Cell, Grid};
pub use line::{Direction, Line, RUN_LENGTH};
pub use line_set::LineSet;
pub use player::{Mark, Player, Ply};
pub use search::{Search, Snapshot, find_next_next_winning, find_next_winning, find_winning};
