//! Binary that solves one board through the harness runner and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture <method> <board> [on_generate|on_expand]`
//!
//! Output: key=value lines (see source for format). Timing and memory are
//! deliberately not printed.

use npuzzle_harness::report::SearchReportV1;
use npuzzle_harness::request::SolveRequest;
use npuzzle_harness::runner::{run, RunPolicy};
use npuzzle_kernel::puzzle::topology::Direction;
use npuzzle_search::policy::{ExploredMarkingV1, SearchPolicyV1};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let method = args.first().expect("usage: solve_fixture <method> <board> [marking]");
    let board = args.get(1).expect("usage: solve_fixture <method> <board> [marking]");
    let marking = match args.get(2).map(String::as_str) {
        None | Some("on_generate") => ExploredMarkingV1::OnGenerate,
        Some("on_expand") => ExploredMarkingV1::OnExpand,
        Some(other) => panic!("unknown marking: {other}"),
    };

    let request = SolveRequest::parse(method, board).expect("invalid request");
    let record = run(
        &request,
        SearchPolicyV1::with_marking(marking),
        &RunPolicy::default(),
    )
    .expect("run failed");
    let report = SearchReportV1::from_record(&record);

    let path: Vec<&str> = report
        .path_to_goal
        .iter()
        .copied()
        .map(Direction::as_str)
        .collect();
    println!("strategy={}", report.strategy);
    println!("status={}", report.status);
    println!("marking={}", report.explored_marking.as_str());
    println!("path={}", path.join(","));
    println!(
        "cost={}",
        report.cost_of_path.map_or("none".to_string(), |c| c.to_string())
    );
    println!("nodes_expanded={}", report.nodes_expanded);
    println!("fringe_size={}", report.fringe_size);
    println!("max_fringe_size={}", report.max_fringe_size);
    println!("max_search_depth={}", report.max_search_depth);
    println!("bound_passes={}", report.bound_passes);
    let digest = report.deterministic_digest().to_prefixed();
    println!("report_digest={digest}");
}
