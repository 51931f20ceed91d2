//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Number of select/expand/simulate/backpropagate passes per search.
    pub iterations: u32,

    /// UCB1 exploration constant (default: 1.41, roughly sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for expansion and playout randomness.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            exploration_constant: 1.41,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    /// Preset for interactive play against a human.
    #[must_use]
    pub fn interactive() -> Self {
        Self::default().with_iterations(2000)
    }

    /// Create a new config with a custom iteration count.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert_eq!(config.iterations, 500);
        assert!((config.exploration_constant - 1.41).abs() < 1e-9);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_interactive_preset() {
        let config = MCTSConfig::interactive();
        assert_eq!(config.iterations, 2000);
        assert_eq!(config.exploration_constant, MCTSConfig::default().exploration_constant);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_iterations(50)
            .with_exploration(2.0)
            .with_seed(123);

        assert_eq!(config.iterations, 50);
        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
