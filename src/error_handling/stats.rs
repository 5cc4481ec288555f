//! Session statistics tracking.
//!
//! Counts submissions and their outcomes over the lifetime of one client
//! session. The controller runs on a single execution context, so plain
//! counters behind `&mut` are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Outcome counters for a client session.
///
/// All failure kinds are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct SessionStats {
    submitted: usize,
    succeeded: usize,
    stale_ignored: usize,
    failures: HashMap<FailureKind, usize>,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    pub fn new() -> Self {
        let failures = FailureKind::iter().map(|kind| (kind, 0)).collect();
        SessionStats {
            submitted: 0,
            succeeded: 0,
            stale_ignored: 0,
            failures,
        }
    }

    pub fn record_submission(&mut self) {
        self.submitted += 1;
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, kind: FailureKind) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    /// A completion arrived for a submission that was no longer the latest.
    pub fn record_stale(&mut self) {
        self.stale_ignored += 1;
    }

    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn stale_ignored(&self) -> usize {
        self.stale_ignored
    }

    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }
}
