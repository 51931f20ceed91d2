//! Monte Carlo Tree Search for Ultimate Tic-Tac-Toe.
//!
//! ## Overview
//!
//! Plain UCB1 MCTS over cloned game states:
//!
//! - **Arena tree**: nodes live in a flat vector and link to their parent by
//!   index, so backpropagation can walk upward without shared ownership
//! - **Random playouts**: uniformly random legal moves to the end of the game
//! - **Loss avoidance**: reaching an opponent win during selection overwrites
//!   the parent's reward with a large negative sentinel
//! - **Reward-maximizing choice**: the returned move is the root child with
//!   the largest accumulated reward
//! - **Deterministic**: the same seed, state and player give the same move
//!
//! ## Usage
//!
//! ```rust
//! use uttt_mcts::core::{GameState, Player};
//! use uttt_mcts::mcts::{MCTSConfig, MCTSSearch};
//! use uttt_mcts::rules::{apply_move, legal_moves};
//!
//! let mut state = GameState::new();
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(100));
//!
//! let mv = search.select_move(&state, Player::One).unwrap();
//! assert!(legal_moves(&state).contains(&mv));
//!
//! apply_move(&mut state, mv).unwrap();
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{random_playout, result_to_reward, select_child, ucb1, LOSS_SENTINEL};
pub use search::{select_move, MCTSSearch};
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
