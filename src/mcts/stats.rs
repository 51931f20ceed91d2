//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during MCTS search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total iterations performed.
    pub iterations: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Random playouts performed. Playouts starting from a finished game
    /// are not counted.
    pub simulations: u32,

    /// Iterations where selection stopped on a finished game.
    pub terminal_selections: u32,

    /// Times the loss sentinel was written to a parent.
    pub loss_flags: u32,

    /// Maximum depth reached during search.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn per_second(&self, count: u32) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            count as f64 * 1_000_000.0 / self.time_us as f64
        }
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        self.per_second(self.iterations)
    }

    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        self.per_second(self.simulations)
    }

    /// Share of iterations whose selection ran into a finished game.
    ///
    /// Climbs towards 1 as the tree covers the endgame and fewer playouts
    /// are needed.
    #[must_use]
    pub fn terminal_ratio(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.terminal_selections as f64 / self.iterations as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} iterations, {} playouts, {} terminal, {} flagged, depth {} ({:.0} it/s)",
            self.iterations,
            self.simulations,
            self.terminal_selections,
            self.loss_flags,
            self.max_depth,
            self.iterations_per_second()
        )
    }
}
