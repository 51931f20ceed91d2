//! Ultimate Tic-Tac-Toe rules.
//!
//! - `engine`: line detection, legality checks and the `apply_move` transition
//! - `movegen`: canonical legal move lists and uniform random moves
//!
//! Everything here is a plain function over an explicit `GameState`; there is
//! no ambient game object.

pub mod engine;
pub mod movegen;

pub use engine::{apply_move, apply_sub_board_move, get_winner, GameResult, WIN_LINES};
pub use movegen::{legal_moves, random_move};
