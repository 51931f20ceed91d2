//! MCTS policies: UCB1 selection, random playouts, reward mapping.

use crate::core::{GameRng, GameState, Player, Result};
use crate::rules::{apply_move, legal_moves, GameResult};

use super::node::MCTSNode;
use super::tree::MCTSTree;

/// Written over a parent's `wins` when selection reaches a position the
/// opponent has won. Equal to -(2^53 - 1).
pub const LOSS_SENTINEL: f64 = -9_007_199_254_740_991.0;

// =============================================================================
// Selection Policy
// =============================================================================

/// UCB1 score: `wins/visits + c * sqrt(ln(parent_visits) / visits)`.
#[inline]
#[must_use]
pub fn ucb1(wins: f64, visits: u32, parent_visits: u32, c: f64) -> f64 {
    let n = visits as f64;
    wins / n + c * ((parent_visits as f64).ln() / n).sqrt()
}

/// Pick the child slot of a fully expanded node with the highest UCB1 score.
///
/// Slots are scanned in ascending order and only a strictly greater score
/// replaces the current best, so the first maximum wins ties. Returns `None`
/// for a node without children.
#[must_use]
pub fn select_child(tree: &MCTSTree, node: &MCTSNode, c: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (slot, &child_id) in node.children.iter().enumerate() {
        if child_id.is_none() {
            continue;
        }
        let child = tree.get(child_id);
        let score = ucb1(child.wins, child.visits, node.visits, c);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((slot, score));
        }
    }

    best.map(|(slot, _)| slot)
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Play uniformly random legal moves until the game ends.
///
/// The state is modified in place. Returns the final result.
pub fn random_playout(state: &mut GameState, rng: &mut GameRng) -> Result<GameResult> {
    loop {
        if let Some(result) = state.result() {
            return Ok(result);
        }
        let moves = legal_moves(state);
        let idx = rng.gen_range_usize(0..moves.len());
        apply_move(state, moves[idx])?;
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Reward for `player`: +1 win, -1 loss, 0 draw.
#[must_use]
pub fn result_to_reward(result: &GameResult, player: Player) -> f64 {
    match result {
        GameResult::Winner(winner) if *winner == player => 1.0,
        GameResult::Winner(_) => -1.0,
        GameResult::Draw => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_children(stats: &[(u32, f64)]) -> MCTSTree {
        let mut tree = MCTSTree::new(stats.len());
        let root = tree.root();
        for (slot, &(visits, wins)) in stats.iter().enumerate() {
            let child = tree.attach_child(root, slot, 1);
            let node = tree.get_mut(child);
            node.visits = visits;
            node.wins = wins;
        }
        tree.get_mut(root).visits = stats.iter().map(|(v, _)| v).sum();
        tree
    }

    #[test]
    fn test_ucb1_formula() {
        let score = ucb1(3.0, 4, 16, 1.41);
        let expected = 0.75 + 1.41 * ((16f64).ln() / 4.0).sqrt();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ucb1_no_exploration_term_on_single_parent_visit() {
        // ln(1) = 0
        assert_eq!(ucb1(1.0, 1, 1, 1.41), 1.0);
    }

    #[test]
    fn test_select_child_prefers_higher_score() {
        let tree = tree_with_children(&[(10, 2.0), (10, 8.0), (10, 5.0)]);
        let selected = select_child(&tree, tree.root_node(), 1.41);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_select_child_explores_rarely_visited() {
        let tree = tree_with_children(&[(100, 60.0), (1, 0.0)]);
        let selected = select_child(&tree, tree.root_node(), 1.41);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_select_child_first_index_wins_ties() {
        let tree = tree_with_children(&[(5, 1.0), (5, 3.0), (5, 3.0)]);
        let selected = select_child(&tree, tree.root_node(), 1.41);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_select_child_terminal_node() {
        let tree = MCTSTree::new(0);
        assert_eq!(select_child(&tree, tree.root_node(), 1.41), None);
    }

    #[test]
    fn test_result_to_reward() {
        let won = GameResult::Winner(Player::Two);
        assert_eq!(result_to_reward(&won, Player::Two), 1.0);
        assert_eq!(result_to_reward(&won, Player::One), -1.0);
        assert_eq!(result_to_reward(&GameResult::Draw, Player::One), 0.0);
    }

    #[test]
    fn test_random_playout_reaches_end() {
        let mut state = GameState::new();
        let mut rng = GameRng::new(3);

        let result = random_playout(&mut state, &mut rng).unwrap();

        assert!(state.completed);
        assert_eq!(state.result(), Some(result));
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_random_playout_deterministic() {
        let mut a = GameState::new();
        let mut b = GameState::new();

        random_playout(&mut a, &mut GameRng::new(99)).unwrap();
        random_playout(&mut b, &mut GameRng::new(99)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_loss_sentinel_value() {
        assert_eq!(LOSS_SENTINEL, -((1u64 << 53) as f64 - 1.0));
    }
}
