//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId). A node owns
//! nothing directly; its children are slots holding ids into the arena, and
//! its parent id is a back-link used only to walk upward when
//! backpropagating.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// `children[i]` corresponds to the i-th entry of `legal_moves` for the
/// state this node represents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Accumulated reward from the searching player's view. Signed.
    pub wins: f64,

    /// Child slots still empty.
    pub unexpanded: usize,

    /// One slot per legal move; NONE until expanded.
    pub children: SmallVec<[NodeId; 9]>,
}

impl MCTSNode {
    /// Create a node for a state with `move_count` legal moves.
    pub fn new(parent: NodeId, depth: u16, move_count: usize) -> Self {
        Self {
            parent,
            depth,
            visits: 0,
            wins: 0.0,
            unexpanded: move_count,
            children: smallvec![NodeId::NONE; move_count],
        }
    }

    /// Create a root node.
    pub fn root(move_count: usize) -> Self {
        Self::new(NodeId::NONE, 0, move_count)
    }

    /// Every child slot has been filled.
    ///
    /// A terminal node has no slots and is trivially fully expanded.
    #[inline]
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.unexpanded == 0
    }

    /// The state behind this node has no legal moves.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Slot index of the `nth` still-empty child, counting in ascending order.
    #[must_use]
    pub fn nth_unexpanded(&self, nth: usize) -> Option<usize> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .nth(nth)
            .map(|(i, _)| i)
    }

    /// Mean reward, or 0 if unvisited.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }
}
