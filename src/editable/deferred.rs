//! Deferred cursor correction.
//!
//! Host widgets recompute their selection when the displayed text changes,
//! so the caret the editor wants has to be reasserted after the host's own
//! re-render. Each edit bumps a generation counter and schedules a
//! zero-delay correction tagged with it; when the queue drains only the
//! correction for the newest generation applies.

use std::collections::VecDeque;

/// Generation-tagged queue of pending cursor corrections.
#[derive(Debug, Clone, Default)]
pub struct CorrectionQueue {
    generation: u64,
    pending: VecDeque<u64>,
}

impl CorrectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new edit and schedule its correction; returns its generation
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.pending.push_back(self.generation);
        self.generation
    }

    /// Latest generation issued
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of scheduled corrections not yet drained
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drain all scheduled corrections.
    ///
    /// Returns `true` when one of them belongs to the latest generation, in
    /// which case the caller applies a correction computed from current
    /// state. Superseded corrections are dropped.
    pub fn drain(&mut self) -> bool {
        let latest = self.generation;
        let mut due = false;
        while let Some(generation) = self.pending.pop_front() {
            if generation == latest {
                due = true;
            } else {
                tracing::trace!(generation, latest, "dropping superseded cursor correction");
            }
        }
        due
    }

    /// Discard pending corrections without applying them.
    ///
    /// The generation keeps counting so stale work can never match.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.generation += 1;
    }
}
