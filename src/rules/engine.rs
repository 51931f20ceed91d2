//! Line detection, move legality and state transitions.
//!
//! `apply_move` is the only way a `GameState` changes. It checks every
//! legality condition before touching the state, so a rejected move leaves
//! the state exactly as it was.

use crate::core::error::{Error, Result};
use crate::core::moves::Move;
use crate::core::player::Player;
use crate::core::state::{is_completed, GameState, SubBoard, CELLS};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// The eight winning lines, scanned in this order: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Owner of the first fully occupied, single-player line, if any.
///
/// Works for both board levels: sub-board cells and meta-board claims.
#[must_use]
pub fn get_winner(cells: &[Option<Player>; CELLS]) -> Option<Player> {
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(p) if cells[b] == Some(p) && cells[c] == Some(p) => Some(p),
        _ => None,
    })
}

/// Place `player` on `cell` of a single sub-board.
///
/// Fails if the board is already resolved or the cell is taken.
pub fn apply_sub_board_move(board: &mut SubBoard, player: Player, cell: usize) -> Result<()> {
    check_sub_board_move(board, cell)?;

    board.moves_played += 1;
    board.cells[cell] = Some(player);
    board.winner = get_winner(&board.cells);
    board.completed = board.moves_played as usize == CELLS || board.winner.is_some();
    Ok(())
}

fn check_sub_board_move(board: &SubBoard, cell: usize) -> Result<()> {
    if cell >= CELLS {
        return Err(Error::invalid_move(format!("cell {cell} is out of range")));
    }
    if board.completed {
        return Err(Error::invalid_move("board is already completed"));
    }
    if board.cells[cell].is_some() {
        return Err(Error::invalid_move(format!("cell {cell} is occupied")));
    }
    Ok(())
}

/// Play `mv` for the active player.
///
/// On success the sub-board, meta-board, lock, winner, completion flag and
/// active player are all updated. On failure nothing changes.
pub fn apply_move(state: &mut GameState, mv: Move) -> Result<()> {
    let Move { board: index, cell } = mv;

    if state.completed {
        return Err(Error::invalid_move("game is already over"));
    }
    if index >= CELLS {
        return Err(Error::invalid_move(format!("board {index} is out of range")));
    }
    if let Some(locked) = state.lock {
        if index != locked {
            return Err(Error::invalid_move(format!(
                "board {index} is locked out, play in board {locked}"
            )));
        }
    }
    check_sub_board_move(&state.boards[index], cell).map_err(|e| match e {
        Error::InvalidMove(detail) => Error::invalid_move(format!("{detail} on board {index}")),
        other => other,
    })?;

    let player = state.active_player;
    apply_sub_board_move(&mut state.boards[index], player, cell)?;
    state.total_moves += 1;

    let board = &state.boards[index];
    if board.winner == Some(player) {
        state.claimed[index] = Some(player);
    }
    if board.completed {
        state.sub_boards_completed += 1;
    }

    state.lock = if state.boards[cell].completed { None } else { Some(cell) };
    state.winner = get_winner(&state.claimed);
    state.completed = is_completed(state.total_moves, state.winner, state.sub_boards_completed);
    state.active_player = player.opponent();

    Ok(())
}
