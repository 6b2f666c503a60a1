//! Search policy types.

/// Search-wide configuration that is independent of the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// When a generated child enters the explored set.
    pub explored_marking: ExploredMarkingV1,
}

impl SearchPolicyV1 {
    /// Policy with a specific explored-marking mode.
    #[must_use]
    pub const fn with_marking(explored_marking: ExploredMarkingV1) -> Self {
        Self { explored_marking }
    }
}

/// Explored-set insertion timing.
///
/// Independently of this setting, an expanded node's fingerprint is always
/// recorded once its children have been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploredMarkingV1 {
    /// A child is recorded as soon as it passes the duplicate test and is
    /// enqueued, so the frontier never holds the same board twice.
    /// Children rejected by an IDA* bound are not recorded.
    #[default]
    OnGenerate,
    /// Only expanded nodes are recorded. The same board may be enqueued via
    /// several parents before its first expansion, and each copy is expanded.
    OnExpand,
}

impl ExploredMarkingV1 {
    /// Stable lowercase name for reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnGenerate => "on_generate",
            Self::OnExpand => "on_expand",
        }
    }
}
