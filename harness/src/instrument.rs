//! Resource instrumentation: wall-clock time and peak resident memory.
//!
//! Both samples are taken outside the engine. Peak RSS is a high-water
//! mark, so reading it once after the run loop returns gives the same value
//! as reading it at the terminal step.

use std::time::{Duration, Instant};

/// Monotonic wall-clock timer started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Resources observed for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceSample {
    pub running_time: Duration,
    /// Peak resident set size in KiB; `None` where the platform has no
    /// `/proc/self/status`.
    pub peak_resident_kib: Option<u64>,
}

impl ResourceSample {
    /// Peak resident memory in MiB, 0.0 when unavailable.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn peak_resident_mib(&self) -> f64 {
        self.peak_resident_kib.map_or(0.0, |kib| kib as f64 / 1024.0)
    }
}

/// Peak resident set size of this process in KiB.
#[must_use]
pub fn peak_resident_kib() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_hwm(&status)
}

/// Extract the `VmHWM:` value (reported in `kB`) from a `/proc/<pid>/status` body.
fn parse_vm_hwm(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.trim().strip_suffix("kB"))
        .and_then(|value| value.trim().parse().ok())
}
