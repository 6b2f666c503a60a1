//! Harness runner: drives the engine's step loop under a caller budget.
//!
//! The engine has no timeout of its own. The runner is the wrapper that
//! owns one: it calls `step()` until a terminal status or until
//! [`RunPolicy::max_steps`] is spent, then samples resources.
//!
//! # Pipeline
//!
//! ```text
//! engine_for() → [step() × N, budget-checked] → elapsed + VmHWM → RunRecord
//! ```

use npuzzle_kernel::error::ConfigurationError;
use npuzzle_search::outcome::{SearchOutcome, SearchStatus};
use npuzzle_search::policy::SearchPolicyV1;
use npuzzle_search::search::engine_for;

use crate::instrument::{peak_resident_kib, ResourceSample, Stopwatch};
use crate::request::SolveRequest;

/// Caller-side limits on a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunPolicy {
    /// Maximum `step()` calls. `None` runs until a terminal status.
    pub max_steps: Option<u64>,
}

/// How a run ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The goal was reached.
    Solved,
    /// The reachable space was exhausted without reaching the goal.
    NoSolution,
    /// The step budget ran out while the engine was still working.
    Interrupted,
}

impl RunStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solved => "success",
            Self::NoSolution => "failure",
            Self::Interrupted => "interrupted",
        }
    }

    /// Process exit code for the `npuzzle` binary.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Solved => 0,
            Self::NoSolution => 2,
            Self::Interrupted => 3,
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a report needs about one run.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub outcome: SearchOutcome,
    pub status: RunStatus,
    /// `step()` calls made, including the terminal one.
    pub steps: u64,
    pub search_policy: SearchPolicyV1,
    pub resources: ResourceSample,
}

/// Run `request` to a terminal status or until the step budget is spent.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if the engine rejects the request's board
/// and topology pairing. Requests built by [`SolveRequest::parse`] never do.
pub fn run(
    request: &SolveRequest,
    search_policy: SearchPolicyV1,
    run_policy: &RunPolicy,
) -> Result<RunRecord, ConfigurationError> {
    if !request.initial.is_solvable(&request.topology) {
        log::warn!(
            "board has the wrong permutation parity; {} will exhaust the reachable space",
            request.strategy.long_name()
        );
    }

    let stopwatch = Stopwatch::start();
    let mut engine = engine_for(
        request.strategy,
        request.initial.clone(),
        &request.topology,
        search_policy,
    )?;

    let mut steps = 0u64;
    let status = loop {
        if run_policy.max_steps.is_some_and(|limit| steps >= limit) {
            log::info!("step budget of {steps} exhausted");
            break RunStatus::Interrupted;
        }
        steps += 1;
        match engine.step() {
            SearchStatus::Working => {}
            SearchStatus::Success => break RunStatus::Solved,
            SearchStatus::Failure => break RunStatus::NoSolution,
        }
    };

    let resources = ResourceSample {
        running_time: stopwatch.elapsed(),
        peak_resident_kib: peak_resident_kib(),
    };
    let outcome = engine.outcome();
    log::info!(
        "{} finished: {status} after {steps} steps, {} expanded, {:.3}s",
        request.strategy.long_name(),
        outcome.stats.nodes_expanded,
        resources.running_time.as_secs_f64()
    );

    Ok(RunRecord {
        outcome,
        status,
        steps,
        search_policy,
        resources,
    })
}
