//! Search report: the reporting adapter over a [`RunRecord`].
//!
//! Two renderings of the same fields:
//!
//! - **text**: one `key: value` per line, the format downstream graders of
//!   the classic 8-puzzle assignment expect (`path_to_goal: ['Up', ...]`).
//! - **json**: the same fields plus strategy, status and IDA* pass count.
//!
//! [`SearchReportV1::deterministic_digest`] commits to every field except
//! timing and memory, so two runs on identical input agree on it across
//! processes and machines.

use std::path::Path;
use std::time::Duration;

use npuzzle_kernel::proof::hash::{canonical_hash, Fingerprint};
use npuzzle_kernel::proof::hash_domain::HashDomain;
use npuzzle_kernel::puzzle::topology::Direction;
use npuzzle_search::policy::ExploredMarkingV1;
use npuzzle_search::strategy::Strategy;

use crate::instrument::ResourceSample;
use crate::runner::{RunRecord, RunStatus};

/// Output format for [`SearchReportV1::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Error writing a report to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    WriteFailed { path: String, detail: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteFailed { path, detail } => {
                write!(f, "failed to write report to {path}: {detail}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// Flattened, render-ready view of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub strategy: Strategy,
    pub status: RunStatus,
    pub explored_marking: ExploredMarkingV1,
    pub path_to_goal: Vec<Direction>,
    pub cost_of_path: Option<u32>,
    pub nodes_expanded: u64,
    pub fringe_size: usize,
    pub max_fringe_size: usize,
    pub search_depth: Option<u32>,
    pub max_search_depth: u32,
    pub bound_passes: u32,
    pub final_bound: Option<u32>,
    pub running_time: Duration,
    pub peak_resident_kib: Option<u64>,
}

impl SearchReportV1 {
    #[must_use]
    pub fn from_record(record: &RunRecord) -> Self {
        let outcome = &record.outcome;
        Self {
            strategy: outcome.strategy,
            status: record.status,
            explored_marking: record.search_policy.explored_marking,
            path_to_goal: outcome.path.clone(),
            cost_of_path: outcome.path_cost,
            nodes_expanded: outcome.stats.nodes_expanded,
            fringe_size: outcome.frontier_size,
            max_fringe_size: outcome.stats.max_frontier_size,
            search_depth: outcome.search_depth,
            max_search_depth: outcome.stats.max_search_depth,
            bound_passes: outcome.stats.bound_passes,
            final_bound: outcome.final_bound,
            running_time: record.resources.running_time,
            peak_resident_kib: record.resources.peak_resident_kib,
        }
    }

    fn max_ram_usage_mib(&self) -> f64 {
        ResourceSample {
            running_time: self.running_time,
            peak_resident_kib: self.peak_resident_kib,
        }
        .peak_resident_mib()
    }

    /// Line-oriented report; the [`Display`](std::fmt::Display) rendering.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Fields that depend only on the input and the search policy.
    fn deterministic_value(&self) -> serde_json::Value {
        let path: Vec<&str> = self
            .path_to_goal
            .iter()
            .copied()
            .map(Direction::as_str)
            .collect();
        serde_json::json!({
            "strategy": self.strategy.as_str(),
            "status": self.status.as_str(),
            "explored_marking": self.explored_marking.as_str(),
            "path_to_goal": path,
            "cost_of_path": self.cost_of_path,
            "nodes_expanded": self.nodes_expanded,
            "fringe_size": self.fringe_size,
            "max_fringe_size": self.max_fringe_size,
            "search_depth": self.search_depth,
            "max_search_depth": self.max_search_depth,
            "bound_passes": self.bound_passes,
            "final_bound": self.final_bound,
        })
    }

    /// Full JSON report, including timing and memory.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = self.deterministic_value();
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "running_time".to_string(),
                serde_json::json!(self.running_time.as_secs_f64()),
            );
            object.insert(
                "max_ram_usage".to_string(),
                serde_json::json!(self.max_ram_usage_mib()),
            );
        }
        value
    }

    /// Digest over the compact, key-sorted JSON of the deterministic fields.
    #[must_use]
    pub fn deterministic_digest(&self) -> Fingerprint {
        let bytes = self.deterministic_value().to_string().into_bytes();
        canonical_hash(HashDomain::SearchReport, &bytes)
    }

    #[must_use]
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => format!("{:#}\n", self.to_json()),
        }
    }

    /// Render and write the report, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::WriteFailed`] if the file cannot be written.
    pub fn write_report(&self, path: &Path, format: ReportFormat) -> Result<(), ReportError> {
        std::fs::write(path, self.render(format)).map_err(|e| ReportError::WriteFailed {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        log::debug!("wrote {format:?} report to {}", path.display());
        Ok(())
    }
}

/// Unsuccessful runs replace the path fields with a `status:` line.
impl std::fmt::Display for SearchReportV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (RunStatus::Solved, Some(cost), Some(depth)) =
            (self.status, self.cost_of_path, self.search_depth)
        {
            let moves: Vec<String> = self
                .path_to_goal
                .iter()
                .map(|d| format!("'{d}'"))
                .collect();
            writeln!(f, "path_to_goal: [{}]", moves.join(", "))?;
            writeln!(f, "cost_of_path: {cost}")?;
            writeln!(f, "nodes_expanded: {}", self.nodes_expanded)?;
            writeln!(f, "fringe_size: {}", self.fringe_size)?;
            writeln!(f, "max_fringe_size: {}", self.max_fringe_size)?;
            writeln!(f, "search_depth: {depth}")?;
        } else {
            writeln!(f, "status: {}", self.status)?;
            writeln!(f, "nodes_expanded: {}", self.nodes_expanded)?;
            writeln!(f, "fringe_size: {}", self.fringe_size)?;
            writeln!(f, "max_fringe_size: {}", self.max_fringe_size)?;
        }
        writeln!(f, "max_search_depth: {}", self.max_search_depth)?;
        writeln!(f, "running_time: {:.8}", self.running_time.as_secs_f64())?;
        writeln!(f, "max_ram_usage: {:.8}", self.max_ram_usage_mib())
    }
}
