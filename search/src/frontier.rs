//! Frontier containers: the generated-but-not-yet-expanded nodes.
//!
//! Three removal disciplines share one trait so the step loop is written
//! once. Containers hold [`NodeId`] handles; the nodes live in the arena.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// Insert / remove-next contract shared by all frontier disciplines.
///
/// `priority` is ignored by the unordered containers.
pub trait Frontier: Default {
    /// Add a node.
    fn insert(&mut self, node: NodeId, priority: u32);

    /// Take the next node per this container's removal policy.
    fn remove_next(&mut self) -> Option<NodeId>;

    /// The node `remove_next` would return, without removing it.
    fn peek(&self) -> Option<NodeId>;

    /// Nodes not yet expanded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    fn clear(&mut self);
}

/// First in, first out (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn insert(&mut self, node: NodeId, _priority: u32) {
        self.queue.push_back(node);
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last in, first out (depth-first and IDA* passes).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn insert(&mut self, node: NodeId, _priority: u32) {
        self.stack.push(node);
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Priority ordering key: lowest priority first, then oldest insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u32,
    pub sequence: u64,
}

/// A heap entry wrapping a node handle with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// minimum.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Minimum-priority frontier with insertion-order tie-break (best-first).
///
/// Popping the heap yields exactly the order a stable sort by priority
/// followed by remove-front would: among equal priorities the node inserted
/// first comes out first. Sequence numbers are unique, so the order is total.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier for PriorityFrontier {
    fn insert(&mut self, node: NodeId, priority: u32) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}
