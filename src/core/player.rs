//! Player identification.
//!
//! Ultimate Tic-Tac-Toe is strictly two-player. Cells on both board levels
//! are stored as `Option<Player>`, where `None` is an empty cell.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `One` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board symbol for this player.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::One), "X");
        assert_eq!(format!("{}", Player::Two), "O");
    }

    #[test]
    fn test_turn_order() {
        assert_eq!(Player::ALL, [Player::One, Player::Two]);
    }
}
