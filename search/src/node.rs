//! Search nodes and the arena that owns them.
//!
//! Nodes reference their parent by [`NodeId`] rather than by pointer. The
//! arena is append-only for the lifetime of a search pass, so every ancestor
//! of a live node stays reachable until the path has been reconstructed.

use npuzzle_kernel::proof::hash::Fingerprint;
use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::Direction;

/// Handle into a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Parent handle (`None` for root).
    pub parent: Option<NodeId>,
    pub board: Board,
    /// Cached `board.fingerprint()`.
    pub fingerprint: Fingerprint,
    /// Move that produced this node (`None` is the `Start` marker).
    pub last_move: Option<Direction>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Moves from the root.
    pub path_cost: u32,
    /// Ordering key for ordered strategies; 0 otherwise.
    pub priority: u32,
}

/// Append-only node store for one search pass.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the root of a pass.
    pub fn insert_root(&mut self, board: Board, priority: u32) -> NodeId {
        let fingerprint = board.fingerprint();
        self.push(SearchNode {
            parent: None,
            board,
            fingerprint,
            last_move: None,
            depth: 0,
            path_cost: 0,
            priority,
        })
    }

    /// Store a child of `parent` reached by `last_move`.
    ///
    /// Depth and path cost are derived from the parent and never change.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        board: Board,
        fingerprint: Fingerprint,
        last_move: Direction,
        priority: u32,
    ) -> NodeId {
        let (depth, path_cost) = {
            let p = self.get(parent);
            (p.depth + 1, p.path_cost + 1)
        };
        self.push(SearchNode {
            parent: Some(parent),
            board,
            fingerprint,
            last_move: Some(last_move),
            depth,
            path_cost,
            priority,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena since its last `clear`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Nodes stored so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop the whole tree (start of an IDA* pass).
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Moves from the root to `id`, in order.
    ///
    /// Walks parent handles, so cost is `O(depth)`.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<Direction> {
        let mut path = Vec::with_capacity(self.get(id).depth as usize);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get(current);
            if let Some(direction) = node.last_move {
                path.push(direction);
            }
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
