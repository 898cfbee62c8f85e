//! Players, board symbols and ply parity.

use serde::{Deserialize, Serialize};

/// Ply number stored in a grid cell.
///
/// `0` marks an empty cell. Moves are numbered from `1` and the parity
/// of the number tells which player made the move.
pub type Ply = u32;

/// Player in the game, identified by the parity of their plies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Moves on odd plies (goes first).
    First,
    /// Moves on even plies.
    Second,
}

impl Player {
    /// Returns the player who made (or will make) the given ply.
    pub fn of_ply(ply: Ply) -> Self {
        if ply % 2 == 1 {
            Player::First
        } else {
            Player::Second
        }
    }
}

/// Symbol drawn on a player's cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Mark {
    /// Symbol used by `player` when `x_on_even` says whether parity-0
    /// plies are drawn as X.
    pub fn for_player(player: Player, x_on_even: bool) -> Self {
        match (player, x_on_even) {
            (Player::Second, true) | (Player::First, false) => Mark::X,
            _ => Mark::O,
        }
    }

    /// Single-character rendering.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_alternates() {
        assert_eq!(Player::of_ply(1), Player::First);
        assert_eq!(Player::of_ply(2), Player::Second);
        assert_eq!(Player::of_ply(13), Player::First);
        assert_eq!(Player::of_ply(8), Player::Second);
    }

    #[test]
    fn test_mark_mapping_follows_flag() {
        assert_eq!(Mark::for_player(Player::First, false), Mark::X);
        assert_eq!(Mark::for_player(Player::Second, false), Mark::O);
        assert_eq!(Mark::for_player(Player::First, true), Mark::O);
        assert_eq!(Mark::for_player(Player::Second, true), Mark::X);
    }
}
