//! Match harness: MCTS against a uniformly random opponent.
//!
//! Plays complete games from the starting position and tallies who won. The
//! random side and the search both draw from seeded streams, so a report is
//! reproducible from `ArenaConfig::seed`.

mod runner;

pub use runner::{play_game, run_arena, self_play, ArenaConfig, ArenaReport, GameRecord};
