//! Game state: the meta-board and its nine sub-boards.
//!
//! ## SubBoard
//!
//! One local 3x3 board. Tracks its cells, move count, winner and whether it is
//! resolved (won or full).
//!
//! ## GameState
//!
//! The 3x3 arrangement of sub-boards plus meta-level bookkeeping:
//! - Claimed meta cells (which player won each sub-board)
//! - Active player and lock (the sub-board the active player must play in)
//! - Move and completion counters, winner, completion flag
//!
//! `rules::apply_move` is the only mutator. Every field is a plain array or
//! scalar, so `clone()` is a full deep copy with no shared structure.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::player::Player;
use crate::rules::{get_winner, GameResult};

/// Number of cells on a sub-board, and of sub-boards on the meta-board.
pub const CELLS: usize = 9;

/// Total number of cells in a game.
pub const TOTAL_CELLS: usize = CELLS * CELLS;

/// One local 3x3 board.
///
/// Invariant: `completed == (moves_played == 9 || winner.is_some())`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    /// Cells indexed 0..9, row-major.
    pub cells: [Option<Player>; CELLS],

    /// Number of occupied cells.
    pub moves_played: u8,

    /// Player holding a winning line, set at most once.
    pub winner: Option<Player>,

    /// Won or full.
    pub completed: bool,
}

impl SubBoard {
    /// Create an empty sub-board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sub-board from raw cells, deriving the move count, winner and
    /// completion flag.
    #[must_use]
    pub fn from_cells(cells: [Option<Player>; CELLS]) -> Self {
        let moves_played = cells.iter().filter(|c| c.is_some()).count() as u8;
        let winner = get_winner(&cells);
        Self {
            cells,
            moves_played,
            winner,
            completed: moves_played as usize == CELLS || winner.is_some(),
        }
    }

    /// Whether `cell` is empty.
    #[inline]
    #[must_use]
    pub fn is_empty_cell(&self, cell: usize) -> bool {
        self.cells[cell].is_none()
    }

    /// Iterate empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }
}

/// Complete state of an Ultimate Tic-Tac-Toe game.
///
/// Invariants:
/// - `lock`, if set, indexes a sub-board that is not completed.
/// - `completed == (total_moves == 81 || winner.is_some() || sub_boards_completed == 9)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The nine sub-boards, row-major.
    pub boards: [SubBoard; CELLS],

    /// Meta-board cells: the winner of each sub-board. Never set on a draw.
    pub claimed: [Option<Player>; CELLS],

    /// Player to move.
    pub active_player: Player,

    /// Sub-board the active player must play in, `None` for a free choice.
    pub lock: Option<usize>,

    /// Moves played across all sub-boards.
    pub total_moves: u8,

    /// Sub-boards that are won or full.
    pub sub_boards_completed: u8,

    /// Winner of the meta-board.
    pub winner: Option<Player>,

    /// Game over.
    pub completed: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the starting position: empty boards, `Player::One` to move,
    /// free choice of sub-board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: Default::default(),
            claimed: [None; CELLS],
            active_player: Player::One,
            lock: None,
            total_moves: 0,
            sub_boards_completed: 0,
            winner: None,
            completed: false,
        }
    }

    /// Build a position from nine sub-boards.
    ///
    /// All meta-level fields are derived from the sub-boards. A lock that is
    /// out of range or points at a completed sub-board is rejected.
    pub fn from_boards(
        boards: [SubBoard; CELLS],
        active_player: Player,
        lock: Option<usize>,
    ) -> Result<Self> {
        if let Some(locked) = lock {
            if locked >= CELLS {
                return Err(Error::invalid_move(format!("lock {locked} is out of range")));
            }
            if boards[locked].completed {
                return Err(Error::invalid_move(format!(
                    "lock {locked} points at a completed board"
                )));
            }
        }

        let mut claimed = [None; CELLS];
        for (slot, board) in claimed.iter_mut().zip(boards.iter()) {
            *slot = board.winner;
        }

        let total_moves = boards.iter().map(|b| b.moves_played).sum::<u8>();
        let sub_boards_completed = boards.iter().filter(|b| b.completed).count() as u8;
        let winner = get_winner(&claimed);

        Ok(Self {
            boards,
            claimed,
            active_player,
            lock,
            total_moves,
            sub_boards_completed,
            winner,
            completed: is_completed(total_moves, winner, sub_boards_completed),
        })
    }

    /// Final result, or `None` while the game is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.completed {
            return None;
        }
        Some(match self.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    /// Get a sub-board.
    #[inline]
    #[must_use]
    pub fn board(&self, index: usize) -> &SubBoard {
        &self.boards[index]
    }
}

/// Meta-board completion rule.
#[inline]
pub(crate) fn is_completed(total_moves: u8, winner: Option<Player>, sub_boards_completed: u8) -> bool {
    total_moves as usize == TOTAL_CELLS || winner.is_some() || sub_boards_completed as usize == CELLS
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = "+-------+-------+-------+";
        writeln!(f, "{separator}")?;
        for meta_row in 0..3 {
            for cell_row in 0..3 {
                write!(f, "|")?;
                for meta_col in 0..3 {
                    let board = &self.boards[meta_row * 3 + meta_col];
                    for cell_col in 0..3 {
                        let ch = board.cells[cell_row * 3 + cell_col].map_or('.', Player::symbol);
                        write!(f, " {ch}")?;
                    }
                    write!(f, " |")?;
                }
                writeln!(f)?;
            }
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}
