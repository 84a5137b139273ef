//! Run statistics tracking.
//!
//! Counts successful lookups and failures per [`FailureKind`] over one run.
//! Counters are atomic so the tracker can be shared behind `Arc` with the
//! signal handler and any observer callbacks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe per-run lookup statistics.
///
/// All failure kinds are initialized to zero on creation.
pub struct RunStats {
    succeeded: AtomicUsize,
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl RunStats {
    /// Creates a new tracker with all counters at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        Self {
            succeeded: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records one successful lookup.
    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
    }

    /// Records one failed lookup under the given kind.
    pub fn record_failure(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Returns the number of successful lookups.
    pub fn success_count(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }

    /// Returns the failure count for one kind.
    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Returns the total number of failed lookups across all kinds.
    pub fn total_failures(&self) -> usize {
        FailureKind::iter().map(|kind| self.failure_count(kind)).sum()
    }

    /// Logs a per-kind breakdown of the run's outcomes at info level.
    pub fn log_summary(&self) {
        info!(
            "Lookup outcomes: {} succeeded, {} failed",
            self.success_count(),
            self.total_failures()
        );
        for kind in FailureKind::iter() {
            let count = self.failure_count(kind);
            if count > 0 {
                info!("  {}: {}", kind.as_str(), count);
            }
        }
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_initialization() {
        let stats = RunStats::new();
        assert_eq!(stats.success_count(), 0);
        for kind in FailureKind::iter() {
            assert_eq!(stats.failure_count(kind), 0);
        }
        assert_eq!(stats.total_failures(), 0);
    }

    #[test]
    fn test_stats_increment() {
        let stats = RunStats::new();
        stats.record_success();
        stats.record_success();
        stats.record_failure(FailureKind::Timeout);
        stats.record_failure(FailureKind::Provider);
        stats.record_failure(FailureKind::Provider);

        assert_eq!(stats.success_count(), 2);
        assert_eq!(stats.failure_count(FailureKind::Timeout), 1);
        assert_eq!(stats.failure_count(FailureKind::Provider), 2);
        assert_eq!(stats.failure_count(FailureKind::Connect), 0);
        assert_eq!(stats.total_failures(), 3);
    }
}
