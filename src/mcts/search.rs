//! Core MCTS search algorithm.
//!
//! Each iteration works on a private clone of the root state:
//!
//! 1. **Selection**: descend through fully expanded nodes by UCB1, replaying
//!    each chosen move on the clone, stopping early if the game ends.
//! 2. **Expansion**: fill one random empty child slot.
//! 3. **Simulation**: random playout to the end of the game.
//! 4. **Backpropagation**: add the reward and a visit to every node on the
//!    path back to the root.
//!
//! The final move is the root child with the largest accumulated reward,
//! not the most visited one.

use std::time::Instant;

use crate::core::{Error, GameRng, GameState, Move, MoveList, Player, Result};
use crate::rules::{apply_move, legal_moves, GameResult};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{random_playout, result_to_reward, select_child, LOSS_SENTINEL};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the search tree, configuration and RNG. The tree from the last
/// search stays available for inspection until the next one starts.
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// The search tree.
    tree: MCTSTree,

    /// Legal moves at the root, aligned with the root's child slots.
    root_moves: MoveList,

    /// RNG for expansion and simulations.
    rng: GameRng,

    /// Search statistics.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            tree: MCTSTree::new(0),
            root_moves: MoveList::new(),
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Choose a move for `player` from `state`.
    ///
    /// Runs `config.iterations` full iterations. `state` is never modified.
    ///
    /// # Errors
    /// - `Error::NoLegalMoves` if the game is over.
    /// - `Error::InvalidMove` only if move generation and the rules disagree,
    ///   which indicates a bug.
    pub fn select_move(&mut self, state: &GameState, player: Player) -> Result<Move> {
        let start = Instant::now();
        self.stats.reset();

        let root_moves = legal_moves(state);
        if root_moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }
        self.tree.reset(root_moves.len());
        self.root_moves = root_moves;

        for _ in 0..self.config.iterations {
            let mut working = state.clone();
            self.iteration(&mut working, player)?;
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        // Without any iterations nothing is expanded; fall back to the first move.
        let slot = self.best_slot().unwrap_or(0);
        let best = self.root_moves[slot];

        log::debug!(
            "search for {player}: best {best}, {} nodes, {}",
            self.tree.len(),
            self.stats
        );

        Ok(best)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, state: &mut GameState, player: Player) -> Result<()> {
        let selected = self.select(state, player)?;
        let leaf = self.expand(selected, state)?;

        let result = match state.result() {
            Some(result) => result,
            None => {
                let mut sim_rng = self.rng.fork();
                self.stats.simulations += 1;
                random_playout(state, &mut sim_rng)?
            }
        };

        self.tree.backpropagate(leaf, result_to_reward(&result, player));
        Ok(())
    }

    /// Descend while the current node is fully expanded.
    ///
    /// If the descent ends the game with the opponent winning, the parent of
    /// the reached node has its reward overwritten with `LOSS_SENTINEL`.
    fn select(&mut self, state: &mut GameState, player: Player) -> Result<NodeId> {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);
            if !node.is_fully_expanded() {
                return Ok(current);
            }
            let Some(slot) = select_child(&self.tree, node, self.config.exploration_constant)
            else {
                return Ok(current);
            };

            let mv = legal_moves(state)[slot];
            apply_move(state, mv)?;
            current = node.children[slot];

            if let Some(result) = state.result() {
                self.stats.terminal_selections += 1;
                if matches!(result, GameResult::Winner(winner) if winner != player) {
                    self.flag_loss(current);
                }
                return Ok(current);
            }
        }
    }

    fn flag_loss(&mut self, node: NodeId) {
        let parent = self.tree.get(node).parent;
        if parent.is_none() {
            return;
        }
        log::trace!("opponent win below {parent}, flagging");
        self.tree.get_mut(parent).wins = LOSS_SENTINEL;
        self.stats.loss_flags += 1;
    }

    /// Attach one random unexpanded child and play its move.
    ///
    /// A finished game is left alone and the node is returned as is.
    fn expand(&mut self, node_id: NodeId, state: &mut GameState) -> Result<NodeId> {
        if state.completed {
            return Ok(node_id);
        }

        let node = self.tree.get(node_id);
        if node.unexpanded == 0 {
            return Ok(node_id);
        }
        let nth = self.rng.gen_range_usize(0..node.unexpanded);
        let Some(slot) = node.nth_unexpanded(nth) else {
            return Ok(node_id);
        };

        let mv = legal_moves(state)[slot];
        apply_move(state, mv)?;

        let child = self.tree.attach_child(node_id, slot, legal_moves(state).len());
        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.tree.get(child).depth);

        Ok(child)
    }

    /// Root slot with the largest accumulated reward; first wins ties.
    fn best_slot(&self) -> Option<usize> {
        let root = self.tree.root_node();
        let mut best: Option<(usize, f64)> = None;

        for (slot, &child) in root.children.iter().enumerate() {
            if child.is_none() {
                continue;
            }
            let wins = self.tree.get(child).wins;
            if best.map_or(true, |(_, top)| wins > top) {
                best = Some((slot, wins));
            }
        }

        best.map(|(slot, _)| slot)
    }

    /// Expanded root children as (move, visits, accumulated reward).
    pub fn root_children(&self) -> Vec<(Move, u32, f64)> {
        let root = self.tree.root_node();
        root.children
            .iter()
            .zip(self.root_moves.iter())
            .filter(|(child, _)| !child.is_none())
            .map(|(&child, &mv)| {
                let node = self.tree.get(child);
                (mv, node.visits, node.wins)
            })
            .collect()
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

/// One-shot search with a fresh context.
pub fn select_move(state: &GameState, player: Player, config: MCTSConfig) -> Result<Move> {
    MCTSSearch::new(config).select_move(state, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> MCTSConfig {
        MCTSConfig::default().with_iterations(100)
    }

    #[test]
    fn test_search_returns_legal_move() {
        let state = GameState::new();
        let mut search = MCTSSearch::new(small_config());

        let mv = search.select_move(&state, Player::One).unwrap();

        assert!(legal_moves(&state).contains(&mv));
    }

    #[test]
    fn test_search_does_not_mutate_state() {
        let mut state = GameState::new();
        apply_move(&mut state, Move::new(4, 2)).unwrap();
        let before = state.clone();

        let mut search = MCTSSearch::new(small_config());
        search.select_move(&state, Player::Two).unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn test_search_on_finished_game() {
        let mut state = GameState::new();
        state.completed = true;

        let mut search = MCTSSearch::new(small_config());
        assert_eq!(search.select_move(&state, Player::One), Err(Error::NoLegalMoves));
    }

    #[test]
    fn test_search_stats() {
        let state = GameState::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(50));
        search.select_move(&state, Player::One).unwrap();

        let stats = search.stats();
        assert_eq!(stats.iterations, 50);
        assert_eq!(stats.simulations, 50);
        assert_eq!(stats.nodes_expanded, 50);
        assert_eq!(search.tree().len(), 51);
    }

    #[test]
    fn test_root_visits_match_iterations() {
        let mut state = GameState::new();
        apply_move(&mut state, Move::new(0, 4)).unwrap();

        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(200));
        search.select_move(&state, Player::Two).unwrap();

        let root = search.tree().root_node();
        assert_eq!(root.visits, 200);

        let child_visits: u32 = search.root_children().iter().map(|(_, v, _)| v).sum();
        assert_eq!(child_visits, 200);
    }

    #[test]
    fn test_search_deterministic() {
        let mut state = GameState::new();
        apply_move(&mut state, Move::new(8, 8)).unwrap();

        let config = MCTSConfig::default().with_iterations(150).with_seed(12345);
        let mv1 = select_move(&state, Player::Two, config.clone()).unwrap();
        let mv2 = select_move(&state, Player::Two, config).unwrap();

        assert_eq!(mv1, mv2);
    }

    #[test]
    fn test_best_move_has_max_reward() {
        let state = GameState::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(300));
        let mv = search.select_move(&state, Player::One).unwrap();

        let children = search.root_children();
        let max = children.iter().map(|(_, _, w)| *w).fold(f64::NEG_INFINITY, f64::max);
        let first_max = children.iter().find(|(_, _, w)| *w == max).unwrap();
        assert_eq!(first_max.0, mv);
    }

    #[test]
    fn test_zero_iterations_falls_back_to_first_move() {
        let state = GameState::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(0));
        assert_eq!(search.select_move(&state, Player::One).unwrap(), Move::new(0, 0));
    }

    #[test]
    fn test_tree_growth() {
        let state = GameState::new();
        let mut search = MCTSSearch::new(MCTSConfig::default().with_iterations(200));
        search.select_move(&state, Player::One).unwrap();

        let tree_stats = search.tree().stats();
        assert!(tree_stats.node_count > 1);
        // 81 root moves: 200 iterations fully expand the root and descend further
        assert!(tree_stats.max_depth > 1);
        assert_eq!(search.stats().max_depth, tree_stats.max_depth);
    }
}
