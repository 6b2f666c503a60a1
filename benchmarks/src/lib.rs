//! Shared helpers for npuzzle benchmark suites.
//!
//! A [`Regime`] is a fixed board plus the strategies that finish on it in
//! benchmark time. Depth-first search is only paired with small boards; on
//! a 3x3 board it wanders most of the 181 440-state orbit.

use npuzzle_harness::request::SolveRequest;
use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::BoardTopology;
use npuzzle_search::outcome::SearchOutcome;
use npuzzle_search::policy::SearchPolicyV1;
use npuzzle_search::search::solve;
use npuzzle_search::strategy::Strategy;

/// A named benchmark input.
#[derive(Debug, Clone, Copy)]
pub struct Regime {
    pub name: &'static str,
    /// Comma-separated tiles, as typed on the command line.
    pub board: &'static str,
    pub strategies: &'static [Strategy],
}

const ALL: &[Strategy] = &Strategy::ALL;
const OPTIMAL: &[Strategy] = &[
    Strategy::BreadthFirst,
    Strategy::BestFirst,
    Strategy::BoundedBestFirst,
];
const INFORMED: &[Strategy] = &[Strategy::BestFirst, Strategy::BoundedBestFirst];

/// Benchmark regimes, cheapest first.
pub const REGIMES: &[Regime] = &[
    Regime {
        name: "unsolvable_2x2",
        board: "0,2,1,3",
        strategies: ALL,
    },
    Regime {
        name: "reference_3x3",
        board: "1,2,5,3,4,0,6,7,8",
        strategies: OPTIMAL,
    },
    Regime {
        name: "hard_3x3",
        board: "8,6,7,2,5,4,3,0,1",
        strategies: OPTIMAL,
    },
    Regime {
        name: "fifteen_24",
        board: "0,8,3,5,4,1,6,2,9,13,10,7,12,14,15,11",
        strategies: INFORMED,
    },
];

/// Parse a regime's board into a topology and initial board.
///
/// # Panics
///
/// Panics if the regime's board literal is invalid. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn prepare(regime: &Regime) -> (BoardTopology, Board) {
    let request = SolveRequest::parse("bfs", regime.board).expect("regime board is valid");
    (request.topology, request.initial)
}

/// Run one strategy to completion with the default policy, bypassing the
/// harness runner's instrumentation.
///
/// # Panics
///
/// Panics if the board and topology disagree, which `prepare` rules out.
#[must_use]
pub fn solve_only(strategy: Strategy, board: &Board, topology: &BoardTopology) -> SearchOutcome {
    solve(strategy, board, topology, SearchPolicyV1::default()).expect("prepared input")
}

/// Flatten an outcome's statistics into a JSON object for bench reports.
#[must_use]
pub fn outcome_summary(outcome: &SearchOutcome) -> serde_json::Value {
    serde_json::json!({
        "status": outcome.status.as_str(),
        "path_cost": outcome.path_cost,
        "nodes_expanded": outcome.stats.nodes_expanded,
        "max_frontier_size": outcome.stats.max_frontier_size,
        "max_search_depth": outcome.stats.max_search_depth,
        "bound_passes": outcome.stats.bound_passes,
    })
}
