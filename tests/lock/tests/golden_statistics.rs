//! Golden statistics lock tests.
//!
//! Proves, for fixed inputs under both explored-marking policies:
//! 1. Every strategy reports the exact path, cost, expansion count,
//!    frontier sizes and depth recorded below
//! 2. The reference 8-puzzle board solves in three moves (Up, Left, Left)
//! 3. A goal root terminates in one step with an empty path for every strategy
//! 4. Reported paths replay onto the goal and their length equals search depth
//!
//! Any change to expansion order, duplicate suppression or frontier
//! bookkeeping shows up here as a number mismatch.

use npuzzle_kernel::puzzle::board::Board;
use npuzzle_kernel::puzzle::topology::{BoardTopology, Direction};
use npuzzle_search::outcome::{SearchOutcome, SearchStatus};
use npuzzle_search::policy::{ExploredMarkingV1, SearchPolicyV1};
use npuzzle_search::search::solve;
use npuzzle_search::strategy::Strategy;

use Direction::{Left, Up};

const REFERENCE: [u16; 9] = [1, 2, 5, 3, 4, 0, 6, 7, 8];
const HARD: [u16; 9] = [8, 6, 7, 2, 5, 4, 3, 0, 1];
const FIFTEEN: [u16; 16] = [0, 8, 3, 5, 4, 1, 6, 2, 9, 13, 10, 7, 12, 14, 15, 11];

/// `(nodes_expanded, fringe_size, max_fringe_size, max_search_depth, bound_passes)`
type Golden = (u64, usize, usize, u32, u32);

fn run(
    tiles: &[u16],
    strategy: Strategy,
    marking: ExploredMarkingV1,
) -> (BoardTopology, SearchOutcome) {
    let topology = BoardTopology::for_cell_count(tiles.len()).unwrap();
    let board = Board::new(tiles.to_vec(), &topology).unwrap();
    let outcome = solve(
        strategy,
        &board,
        &topology,
        SearchPolicyV1::with_marking(marking),
    )
    .unwrap();
    (topology, outcome)
}

fn assert_golden(outcome: &SearchOutcome, golden: Golden, label: &str) {
    let (expanded, fringe, max_fringe, max_depth, passes) = golden;
    assert_eq!(
        outcome.stats.nodes_expanded, expanded,
        "{label}: nodes_expanded"
    );
    assert_eq!(outcome.frontier_size, fringe, "{label}: fringe_size");
    assert_eq!(
        outcome.stats.max_frontier_size, max_fringe,
        "{label}: max_fringe_size"
    );
    assert_eq!(
        outcome.stats.max_search_depth, max_depth,
        "{label}: max_search_depth"
    );
    assert_eq!(outcome.stats.bound_passes, passes, "{label}: bound_passes");
}

fn assert_path_reaches_goal(topology: &BoardTopology, tiles: &[u16], outcome: &SearchOutcome) {
    let start = Board::new(tiles.to_vec(), topology).unwrap();
    let end = start.replay(topology, &outcome.path).unwrap();
    assert!(end.is_goal());
    let length = u32::try_from(outcome.path.len()).unwrap();
    assert_eq!(outcome.search_depth, Some(length));
    assert_eq!(outcome.path_cost, Some(length));
}

// ---------------------------------------------------------------------------
// 1-2. Reference board
// ---------------------------------------------------------------------------

#[test]
fn reference_board_on_generate() {
    let cases: [(Strategy, Golden); 4] = [
        (Strategy::BreadthFirst, (10, 11, 12, 4, 1)),
        (Strategy::DepthFirst, (181_437, 2, 42_913, 66_125, 1)),
        (Strategy::BestFirst, (3, 3, 4, 3, 1)),
        (Strategy::BoundedBestFirst, (3, 0, 1, 3, 1)),
    ];
    for (strategy, golden) in cases {
        let (topology, outcome) = run(&REFERENCE, strategy, ExploredMarkingV1::OnGenerate);
        assert_eq!(outcome.status, SearchStatus::Success, "{strategy}");
        assert_eq!(outcome.path, [Up, Left, Left], "{strategy}");
        assert_golden(&outcome, golden, strategy.as_str());
        assert_path_reaches_goal(&topology, &REFERENCE, &outcome);
    }
}

#[test]
fn reference_board_on_expand() {
    let cases: [(Strategy, Golden); 3] = [
        (Strategy::BreadthFirst, (10, 11, 12, 4, 1)),
        (Strategy::BestFirst, (3, 3, 4, 3, 1)),
        (Strategy::BoundedBestFirst, (3, 0, 1, 3, 1)),
    ];
    for (strategy, golden) in cases {
        let (_, outcome) = run(&REFERENCE, strategy, ExploredMarkingV1::OnExpand);
        assert_eq!(outcome.path, [Up, Left, Left], "{strategy}");
        assert_golden(&outcome, golden, strategy.as_str());
    }
}

#[test]
fn depth_first_on_expand_takes_a_long_detour() {
    let (topology, outcome) = run(
        &REFERENCE,
        Strategy::DepthFirst,
        ExploredMarkingV1::OnExpand,
    );
    assert_eq!(outcome.status, SearchStatus::Success);
    assert_eq!(outcome.path_cost, Some(31));
    assert_golden(&outcome, (31, 27, 28, 31, 1), "dfs on_expand");
    assert_path_reaches_goal(&topology, &REFERENCE, &outcome);
}

#[test]
fn hard_board_informed_strategies() {
    let (topology, ast) = run(&HARD, Strategy::BestFirst, ExploredMarkingV1::OnGenerate);
    assert_golden(&ast, (4433, 2307, 2308, 27, 1), "ast");
    assert_path_reaches_goal(&topology, &HARD, &ast);

    let (_, ida) = run(
        &HARD,
        Strategy::BoundedBestFirst,
        ExploredMarkingV1::OnGenerate,
    );
    assert_eq!(ida.path_cost, Some(27));
    assert_golden(&ida, (5086, 11, 19, 27, 5), "ida");
    assert_path_reaches_goal(&topology, &HARD, &ida);
}

#[test]
fn fifteen_puzzle_informed_strategies() {
    let (topology, ast) = run(&FIFTEEN, Strategy::BestFirst, ExploredMarkingV1::OnGenerate);
    assert_eq!(ast.path_cost, Some(24));
    assert_golden(&ast, (1288, 1332, 1333, 24, 1), "ast");
    assert_path_reaches_goal(&topology, &FIFTEEN, &ast);

    let (_, ida) = run(
        &FIFTEEN,
        Strategy::BoundedBestFirst,
        ExploredMarkingV1::OnGenerate,
    );
    assert_eq!(ida.path_cost, Some(24));
    assert_golden(&ida, (1202, 4, 13, 24, 5), "ida");
    assert_path_reaches_goal(&topology, &FIFTEEN, &ida);
}

#[test]
fn two_by_two_one_move_from_goal() {
    let tiles = [1, 0, 2, 3];
    let cases: [(Strategy, Golden); 4] = [
        (Strategy::BreadthFirst, (2, 1, 2, 2, 1)),
        (Strategy::DepthFirst, (11, 0, 2, 10, 1)),
        (Strategy::BestFirst, (1, 1, 2, 1, 1)),
        (Strategy::BoundedBestFirst, (1, 0, 1, 1, 1)),
    ];
    for (strategy, golden) in cases {
        let (_, outcome) = run(&tiles, strategy, ExploredMarkingV1::OnGenerate);
        assert_eq!(outcome.path, [Left], "{strategy}");
        assert_golden(&outcome, golden, strategy.as_str());
    }
}

// ---------------------------------------------------------------------------
// 3. Goal root
// ---------------------------------------------------------------------------

#[test]
fn goal_root_is_an_empty_solution_everywhere() {
    for side in [2, 3, 4] {
        let topology = BoardTopology::new(side).unwrap();
        let goal = Board::goal(&topology);
        for strategy in Strategy::ALL {
            for marking in [ExploredMarkingV1::OnGenerate, ExploredMarkingV1::OnExpand] {
                let policy = SearchPolicyV1::with_marking(marking);
                let outcome = solve(strategy, &goal, &topology, policy).unwrap();
                assert!(outcome.is_success());
                assert!(outcome.path.is_empty());
                assert_eq!(outcome.path_cost, Some(0));
                assert_golden(&outcome, (0, 0, 1, 0, 1), strategy.as_str());
            }
        }
    }
}
