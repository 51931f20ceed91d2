//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. Children are
//! owned by the arena, parents are plain indices, so there are no reference
//! cycles and the whole tree can be serialized.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, NodeId};

/// Arena-based MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree with a root for a state with `move_count` legal moves.
    pub fn new(move_count: usize) -> Self {
        Self::with_capacity(move_count, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(move_count: usize, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(move_count));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a child of `parent` in slot `slot`, sized for `move_count` moves.
    ///
    /// The slot must be empty; the parent's unexpanded count is decremented.
    pub fn attach_child(&mut self, parent: NodeId, slot: usize, move_count: usize) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let child = self.alloc(MCTSNode::new(parent, depth, move_count));

        let node = self.get_mut(parent);
        debug_assert!(node.children[slot].is_none(), "slot {slot} already expanded");
        node.children[slot] = child;
        node.unexpanded -= 1;
        child
    }

    /// Add `reward` and one visit to `from` and every ancestor up to the root.
    pub fn backpropagate(&mut self, from: NodeId, reward: f64) {
        let mut current = from;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.wins += reward;
            current = node.parent;
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let total_slots: usize = self.nodes.iter().map(|n| n.children.len()).sum();
        let expanded_slots = total_slots
            - self.nodes.iter().map(|n| n.unexpanded).sum::<usize>();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            total_slots,
            expanded_slots,
        }
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, move_count: usize) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::root(move_count));
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Total number of child slots (moves).
    pub total_slots: usize,

    /// Number of filled child slots.
    pub expanded_slots: usize,
}

impl TreeStats {
    /// Get the branching factor (average slots per node).
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_slots as f64 / self.node_count as f64
        }
    }

    /// Get the expansion ratio (expanded slots / total slots).
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        if self.total_slots == 0 {
            0.0
        } else {
            self.expanded_slots as f64 / self.total_slots as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_new() {
        let tree = MCTSTree::new(5);

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert_eq!(tree.root_node().children.len(), 5);
    }

    #[test]
    fn test_attach_child() {
        let mut tree = MCTSTree::new(3);
        let root = tree.root();

        let child = tree.attach_child(root, 1, 7);

        assert_eq!(child, NodeId::new(1));
        assert_eq!(tree.get(root).children[1], child);
        assert_eq!(tree.get(root).unexpanded, 2);
        assert_eq!(tree.get(child).parent, root);
        assert_eq!(tree.get(child).depth, 1);
        assert_eq!(tree.get(child).children.len(), 7);
    }

    #[test]
    fn test_backpropagate_walks_to_root() {
        let mut tree = MCTSTree::new(2);
        let root = tree.root();
        let a = tree.attach_child(root, 0, 2);
        let b = tree.attach_child(a, 1, 0);
        let other = tree.attach_child(root, 1, 4);

        tree.backpropagate(b, -1.0);
        tree.backpropagate(a, 1.0);

        assert_eq!(tree.get(b).visits, 1);
        assert_eq!(tree.get(b).wins, -1.0);
        assert_eq!(tree.get(a).visits, 2);
        assert_eq!(tree.get(a).wins, 0.0);
        assert_eq!(tree.get(root).visits, 2);
        assert_eq!(tree.get(other).visits, 0);
    }

    #[test]
    fn test_tree_reset() {
        let mut tree = MCTSTree::new(2);
        let root = tree.root();
        tree.attach_child(root, 0, 3);
        assert_eq!(tree.len(), 2);

        tree.reset(9);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().children.len(), 9);
        assert_eq!(tree.root_node().visits, 0);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MCTSTree::new(2);
        let root = tree.root();
        let child = tree.attach_child(root, 0, 0);
        tree.backpropagate(child, 1.0);

        let stats = tree.stats();

        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.terminal_count, 1);
        assert_eq!(stats.total_slots, 2);
        assert_eq!(stats.expanded_slots, 1);
        assert_eq!(stats.expansion_ratio(), 0.5);
        assert_eq!(stats.branching_factor(), 1.0);
    }

    #[test]
    fn test_tree_iter() {
        let mut tree = MCTSTree::new(1);
        let root = tree.root();
        tree.attach_child(root, 0, 1);

        let nodes: Vec<_> = tree.iter().collect();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].0, NodeId::new(0));
        assert_eq!(nodes[1].0, NodeId::new(1));
    }

    #[test]
    fn test_tree_serialization() {
        let mut tree = MCTSTree::new(2);
        let root = tree.root();
        let child = tree.attach_child(root, 0, 1);
        tree.backpropagate(child, 1.0);

        let json = serde_json::to_string(&tree).unwrap();
        let deserialized: MCTSTree = serde_json::from_str(&json).unwrap();

        assert_eq!(tree.len(), deserialized.len());
        assert_eq!(tree.root_node().visits, deserialized.root_node().visits);
    }
}
