//! # uttt-mcts
//!
//! Ultimate Tic-Tac-Toe rules engine with a Monte Carlo Tree Search player.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A `GameState` value is passed into every rule;
//!    there is no ambient game object.
//!
//! 2. **Atomic Moves**: `apply_move` either applies a move completely or
//!    rejects it with `Error::InvalidMove` and leaves the state untouched.
//!
//! 3. **Deterministic Search**: All randomness comes from seeded `GameRng`
//!    streams, so searches and arena runs can be replayed exactly.
//!
//! ## Architecture
//!
//! - **Two board levels**: nine 3x3 sub-boards whose winners claim cells of
//!   a 3x3 meta-board. The cell just played decides which sub-board the
//!   opponent is locked into.
//!
//! - **Clone per iteration**: `GameState` is a flat value type, so each
//!   search iteration works on a cheap, fully independent copy.
//!
//! ## Modules
//!
//! - `core`: Players, moves, game state, RNG, errors
//! - `rules`: Win detection, move legality, move generation
//! - `mcts`: Monte Carlo Tree Search for AI
//! - `arena`: Search vs random-opponent harness

pub mod arena;
pub mod core;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Error, GameRng, GameState, Move, MoveList, Player, Result, SubBoard};

pub use crate::rules::{apply_move, get_winner, legal_moves, random_move, GameResult};

pub use crate::mcts::{MCTSConfig, MCTSSearch, MCTSTree, MCTSNode, NodeId, SearchStats, TreeStats};

pub use crate::arena::{run_arena, ArenaConfig, ArenaReport};
