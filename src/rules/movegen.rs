//! Legal move generation.
//!
//! The order of `legal_moves` is part of the contract: ascending sub-board,
//! then ascending cell. Search trees index their children by position in this
//! list, so the same state must always yield the same sequence.

use crate::core::moves::{Move, MoveList};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, CELLS};

/// All legal moves for the active player, in canonical order.
///
/// Empty once the game is over. When a lock is set only the locked
/// sub-board is considered; otherwise every unresolved sub-board is.
#[must_use]
pub fn legal_moves(state: &GameState) -> MoveList {
    let mut moves = MoveList::new();
    if state.completed {
        return moves;
    }

    let candidates = match state.lock {
        Some(locked) => locked..locked + 1,
        None => 0..CELLS,
    };

    for index in candidates {
        let board = &state.boards[index];
        if board.completed {
            continue;
        }
        moves.extend(board.empty_cells().map(|cell| Move::new(index, cell)));
    }

    moves
}

/// A uniformly random legal move, or `None` if the game is over.
pub fn random_move(state: &GameState, rng: &mut GameRng) -> Option<Move> {
    let moves = legal_moves(state);
    rng.choose(&moves).copied()
}
