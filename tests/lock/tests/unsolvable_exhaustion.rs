//! Unsolvable-input lock tests.
//!
//! Proves:
//! 1. BFS and DFS exhaust the full 181 440-board orbit of an odd-parity
//!    8-puzzle and report failure with no path
//! 2. Every strategy under both markings fails on every unsolvable 2x2 board
//! 3. IDA* reports failure once no finite next bound remains

use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::BoardTopology;
use npuzzle_search::outcome::SearchStatus;
use npuzzle_search::policy::{ExploredMarkingV1, SearchPolicyV1};
use npuzzle_search::search::solve;
use npuzzle_search::strategy::Strategy;

const SWAPPED: [u16; 9] = [1, 0, 2, 3, 4, 5, 6, 8, 7];

// ---------------------------------------------------------------------------
// 1. 8-puzzle exhaustion
// ---------------------------------------------------------------------------

#[test]
fn uninformed_strategies_exhaust_the_orbit() {
    let topology = BoardTopology::new(3).unwrap();
    let board = Board::new(SWAPPED.to_vec(), &topology).unwrap();
    assert!(!board.is_solvable(&topology));

    let cases = [
        (Strategy::BreadthFirst, 25_133, 31),
        (Strategy::DepthFirst, 42_913, 66_123),
    ];
    for (strategy, max_fringe, max_depth) in cases {
        let outcome = solve(strategy, &board, &topology, SearchPolicyV1::default()).unwrap();
        assert_eq!(outcome.status, SearchStatus::Failure, "{strategy}");
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.path_cost, None);
        assert_eq!(outcome.search_depth, None);
        assert_eq!(outcome.frontier_size, 0);
        assert_eq!(outcome.stats.nodes_expanded, 181_440, "{strategy}");
        assert_eq!(outcome.stats.max_frontier_size, max_fringe, "{strategy}");
        assert_eq!(outcome.stats.max_search_depth, max_depth, "{strategy}");
    }
}

// ---------------------------------------------------------------------------
// 2. 2x2 boards
// ---------------------------------------------------------------------------

#[test]
fn every_unsolvable_two_by_two_fails() {
    let topology = BoardTopology::new(2).unwrap();
    let mut unsolvable = 0;
    for code in 0..256u16 {
        let tiles: Vec<u16> = (0..4).map(|digit| (code >> (2 * digit)) & 3).collect();
        let Ok(board) = Board::new(tiles, &topology) else {
            continue;
        };
        if board.is_solvable(&topology) {
            continue;
        }
        unsolvable += 1;
        for strategy in Strategy::ALL {
            for marking in [ExploredMarkingV1::OnGenerate, ExploredMarkingV1::OnExpand] {
                let outcome = solve(
                    strategy,
                    &board,
                    &topology,
                    SearchPolicyV1::with_marking(marking),
                )
                .unwrap();
                assert_eq!(
                    outcome.status,
                    SearchStatus::Failure,
                    "{strategy} {marking:?} on {board}"
                );
                assert!(outcome.stats.nodes_expanded > 0);
            }
        }
    }
    assert_eq!(unsolvable, 12);
}

// ---------------------------------------------------------------------------
// 3. IDA* bound exhaustion
// ---------------------------------------------------------------------------

#[test]
fn bounded_search_fails_after_last_finite_bound() {
    let topology = BoardTopology::new(2).unwrap();
    let cases = [
        ([0, 2, 1, 3], ExploredMarkingV1::OnGenerate, 69, 6),
        ([0, 2, 1, 3], ExploredMarkingV1::OnExpand, 70, 6),
        ([3, 1, 2, 0], ExploredMarkingV1::OnGenerate, 53, 6),
        ([3, 1, 2, 0], ExploredMarkingV1::OnExpand, 70, 7),
    ];
    for (tiles, marking, expanded, passes) in cases {
        let board = Board::new(tiles.to_vec(), &topology).unwrap();
        let outcome = solve(
            Strategy::BoundedBestFirst,
            &board,
            &topology,
            SearchPolicyV1::with_marking(marking),
        )
        .unwrap();
        assert_eq!(outcome.status, SearchStatus::Failure);
        assert_eq!(
            outcome.stats.nodes_expanded, expanded,
            "{tiles:?} {marking:?}"
        );
        assert_eq!(outcome.stats.bound_passes, passes, "{tiles:?} {marking:?}");
    }
}
