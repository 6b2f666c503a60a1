//! Terminal search results and running statistics.

use npuzzle_kernel::puzzle::topology::Direction;

use crate::strategy::Strategy;

/// Result of one `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// More steps are needed.
    Working,
    /// The goal board was removed from the frontier.
    Success,
    /// The reachable space (or, for IDA*, every finite bound) is exhausted.
    Failure,
}

impl SearchStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Working)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters maintained by the engine.
///
/// For IDA* these accumulate across every bound pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier that were not the goal.
    pub nodes_expanded: u64,
    /// Largest frontier size observed (the seeded root counts).
    pub max_frontier_size: usize,
    /// Deepest node ever enqueued.
    pub max_search_depth: u32,
    /// Bound passes started (always 1 for unbounded strategies).
    pub bound_passes: u32,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            nodes_expanded: 0,
            max_frontier_size: 1,
            max_search_depth: 0,
            bound_passes: 1,
        }
    }
}

/// Everything the reporting adapter needs from a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub status: SearchStatus,
    /// Moves from the initial board to the goal; empty unless `Success`.
    pub path: Vec<Direction>,
    /// Path cost of the terminal node (`None` unless `Success`).
    pub path_cost: Option<u32>,
    /// Depth of the terminal node (`None` unless `Success`).
    pub search_depth: Option<u32>,
    /// Frontier size when the search stopped.
    pub frontier_size: usize,
    pub stats: SearchStats,
    /// Cost bound of the last IDA* pass.
    pub final_bound: Option<u32>,
}

impl SearchOutcome {
    /// Returns `true` if the search reached the goal.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Success
    }
}
