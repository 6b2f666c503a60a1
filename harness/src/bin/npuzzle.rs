//! `npuzzle`: solve one sliding-tile board and write a report file.
//!
//! ```text
//! npuzzle bfs 1,2,5,3,4,0,6,7,8
//! npuzzle ida 8,6,7,2,5,4,3,0,1 --format json --output result.json -vv
//! ```
//!
//! Exit codes: 0 solved, 1 bad input or unwritable report, 2 no solution,
//! 3 step budget exhausted.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use npuzzle_harness::report::{ReportFormat, SearchReportV1};
use npuzzle_harness::request::SolveRequest;
use npuzzle_harness::runner::{run, RunPolicy};
use npuzzle_search::policy::{ExploredMarkingV1, SearchPolicyV1};

const EXIT_BAD_INPUT: u8 = 1;

#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(about = "Solve an N-puzzle board by breadth-first, depth-first, A* or IDA* search")]
struct Cli {
    /// Strategy: bfs, dfs, ast or ida (long names such as best-first also work)
    method: String,

    /// Tiles in row-major order, comma-separated, 0 for the blank
    board: String,

    /// Report destination
    #[arg(long, short, default_value = "output.txt")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Stop after this many engine steps and report the run as interrupted
    #[arg(long)]
    max_steps: Option<u64>,

    /// Record boards as explored only when expanded, not when enqueued
    #[arg(long)]
    mark_on_expand: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let request = match SolveRequest::parse(&cli.method, &cli.board) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("npuzzle: {e}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    let search_policy = if cli.mark_on_expand {
        SearchPolicyV1::with_marking(ExploredMarkingV1::OnExpand)
    } else {
        SearchPolicyV1::default()
    };
    let run_policy = RunPolicy {
        max_steps: cli.max_steps,
    };

    let record = match run(&request, search_policy, &run_policy) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("npuzzle: {e}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    let report = SearchReportV1::from_record(&record);
    if let Err(e) = report.write_report(&cli.output, cli.format) {
        eprintln!("npuzzle: {e}");
        return ExitCode::from(EXIT_BAD_INPUT);
    }
    log::info!(
        "report digest {}",
        report.deterministic_digest().to_prefixed()
    );

    ExitCode::from(record.status.exit_code())
}
