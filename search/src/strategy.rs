//! Strategy behaviours plugged into the shared step loop.
//!
//! | Strategy | Frontier | Child priority | Child order |
//! |---|---|---|---|
//! | [`BreadthFirst`] | FIFO | 0 | forward |
//! | [`DepthFirst`] | LIFO | 0 | reversed |
//! | [`BestFirst`] (A*) | priority | `g + h` | reversed |
//! | [`BoundedBestFirst`] (IDA*) | LIFO per pass | `g + h`, bound test only | reversed |
//!
//! Reversed iteration on a LIFO frontier makes the first-listed direction
//! the first one popped.

use std::str::FromStr;

use npuzzle_kernel::error::ConfigurationError;
use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::BoardTopology;

use crate::frontier::{FifoFrontier, LifoFrontier, PriorityFrontier};

/// Order in which a node's legal moves become children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOrder {
    Forward,
    Reversed,
}

/// Per-strategy behaviour consumed by [`crate::search::SearchEngine`].
pub trait SearchStrategy {
    /// Container discipline; its removal policy is the strategy's.
    type Frontier: crate::frontier::Frontier;

    /// Selector value this behaviour implements.
    const KIND: Strategy;

    /// Child generation order.
    const ITERATION: IterationOrder;

    /// Iterative cost-bound escalation (IDA*).
    const BOUNDED: bool;

    /// Let a strictly cheaper path re-admit an explored board.
    const REOPEN_CHEAPER: bool;

    /// Priority of a node holding `board` at `path_cost`.
    fn priority(path_cost: u32, board: &Board, topology: &BoardTopology) -> u32;
}

/// Uninterrupted breadth-first search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

/// Depth-first search without a depth limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

/// A*: best-first on `path_cost + heuristic`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirst;

/// IDA*: depth-first passes under a rising `path_cost + heuristic` bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedBestFirst;

fn estimated_total(path_cost: u32, board: &Board, topology: &BoardTopology) -> u32 {
    path_cost.saturating_add(board.heuristic(topology))
}

impl SearchStrategy for BreadthFirst {
    type Frontier = FifoFrontier;
    const KIND: Strategy = Strategy::BreadthFirst;
    const ITERATION: IterationOrder = IterationOrder::Forward;
    const BOUNDED: bool = false;
    const REOPEN_CHEAPER: bool = false;

    fn priority(_path_cost: u32, _board: &Board, _topology: &BoardTopology) -> u32 {
        0
    }
}

impl SearchStrategy for DepthFirst {
    type Frontier = LifoFrontier;
    const KIND: Strategy = Strategy::DepthFirst;
    const ITERATION: IterationOrder = IterationOrder::Reversed;
    const BOUNDED: bool = false;
    const REOPEN_CHEAPER: bool = false;

    fn priority(_path_cost: u32, _board: &Board, _topology: &BoardTopology) -> u32 {
        0
    }
}

impl SearchStrategy for BestFirst {
    type Frontier = PriorityFrontier;
    const KIND: Strategy = Strategy::BestFirst;
    const ITERATION: IterationOrder = IterationOrder::Reversed;
    const BOUNDED: bool = false;
    const REOPEN_CHEAPER: bool = true;

    fn priority(path_cost: u32, board: &Board, topology: &BoardTopology) -> u32 {
        estimated_total(path_cost, board, topology)
    }
}

impl SearchStrategy for BoundedBestFirst {
    type Frontier = LifoFrontier;
    const KIND: Strategy = Strategy::BoundedBestFirst;
    const ITERATION: IterationOrder = IterationOrder::Reversed;
    const BOUNDED: bool = true;
    const REOPEN_CHEAPER: bool = true;

    fn priority(path_cost: u32, board: &Board, topology: &BoardTopology) -> u32 {
        estimated_total(path_cost, board, topology)
    }
}

/// Strategy selector parsed from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    BestFirst,
    BoundedBestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::BestFirst,
        Self::BoundedBestFirst,
    ];

    /// Short selector (`bfs`, `dfs`, `ast`, `ida`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::BestFirst => "ast",
            Self::BoundedBestFirst => "ida",
        }
    }

    /// Long selector (`breadth-first`, ...).
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::BestFirst => "best-first",
            Self::BoundedBestFirst => "bounded-best-first",
        }
    }

    /// Whether this strategy guarantees a minimum-cost path.
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::DepthFirst)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| {
                k.as_str().eq_ignore_ascii_case(wanted)
                    || k.long_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ConfigurationError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}
