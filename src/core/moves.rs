//! Move representation: sub-board index + cell index.
//!
//! A `Move` is only meaningful relative to a specific `GameState`. Indices are
//! 0-based in both dimensions; translating to 1-based labels is left to
//! whatever presents moves to a human.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A move in Ultimate Tic-Tac-Toe.
///
/// ## Example
///
/// ```
/// use uttt_mcts::core::Move;
///
/// let centre = Move::new(4, 4);
/// assert_eq!(centre.board, 4);
/// assert_eq!(format!("{}", centre), "(4, 4)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Sub-board index (0..9).
    pub board: usize,

    /// Cell index within the sub-board (0..9).
    pub cell: usize,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }
}

impl From<(usize, usize)> for Move {
    fn from((board, cell): (usize, usize)) -> Self {
        Self::new(board, cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.board, self.cell)
    }
}

/// Ordered list of moves.
///
/// Inline capacity covers a locked sub-board (at most 9 moves), the common case.
pub type MoveList = SmallVec<[Move; 9]>;
