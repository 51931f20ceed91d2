//! Core types: players, moves, game state, RNG, errors.
//!
//! These are the building blocks that the rules engine mutates and the
//! search clones.

pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{Error, Result};
pub use moves::{Move, MoveList};
pub use player::Player;
pub use rng::GameRng;
pub use state::{GameState, SubBoard, CELLS, TOTAL_CELLS};
