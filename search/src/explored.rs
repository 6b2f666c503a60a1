//! Explored set: duplicate suppression keyed by board fingerprint.
//!
//! Each entry remembers the cheapest path cost at which its board was
//! recorded. First-seen-wins strategies treat any entry as a duplicate;
//! cost-ordered strategies let a strictly cheaper path through again, which
//! is what keeps A* and IDA* paths minimal.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use npuzzle_kernel::proof::hash::Fingerprint;

#[derive(Debug, Default)]
pub struct ExploredSet {
    best_cost: HashMap<Fingerprint, u32>,
}

impl ExploredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a board reached at `path_cost` should be suppressed.
    ///
    /// With `reopen_cheaper` unset any recorded fingerprint is a duplicate.
    /// With it set, only a record at the same or lower cost is.
    #[must_use]
    pub fn is_duplicate(
        &self,
        fingerprint: &Fingerprint,
        path_cost: u32,
        reopen_cheaper: bool,
    ) -> bool {
        match self.best_cost.get(fingerprint) {
            None => false,
            Some(_) if !reopen_cheaper => true,
            Some(&recorded) => recorded <= path_cost,
        }
    }

    /// Whether `fingerprint` has been recorded at any cost.
    #[must_use]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.best_cost.contains_key(fingerprint)
    }

    /// Record `fingerprint` at `path_cost`, keeping the cheaper of old and new.
    ///
    /// Returns `true` if the fingerprint was not present before.
    pub fn record(&mut self, fingerprint: Fingerprint, path_cost: u32) -> bool {
        match self.best_cost.entry(fingerprint) {
            Entry::Occupied(mut recorded) => {
                let cheapest = (*recorded.get()).min(path_cost);
                recorded.insert(cheapest);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(path_cost);
                true
            }
        }
    }

    /// Distinct boards recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best_cost.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_cost.is_empty()
    }

    /// Forget everything (start of an IDA* pass).
    pub fn clear(&mut self) {
        self.best_cost.clear();
    }
}
