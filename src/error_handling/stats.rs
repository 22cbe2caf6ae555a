//! Run statistics tracking.
//!
//! Thread-safe counters updated by the dispatcher and the workers while a run
//! is in progress.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FetchErrorKind;

/// Thread-safe run statistics tracker.
///
/// Every `FetchErrorKind` is initialized to zero on creation, so the map is
/// never mutated after construction and can be shared through an `Arc`.
pub struct RunStats {
    admitted: AtomicUsize,
    invalid: AtomicUsize,
    succeeded: AtomicUsize,
    panicked: AtomicUsize,
    failures: HashMap<FetchErrorKind, AtomicUsize>,
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FetchErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        RunStats {
            admitted: AtomicUsize::new(0),
            invalid: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            panicked: AtomicUsize::new(0),
            failures,
        }
    }

    pub fn record_admitted(&self) {
        self.admitted.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_invalid(&self) {
        self.invalid.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
    }

    /// A worker panicked before it could report an outcome.
    pub fn record_panic(&self) {
        self.panicked.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_failure(&self, kind: FetchErrorKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::SeqCst);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in RunStats initialization.",
                kind
            );
        }
    }

    pub fn admitted(&self) -> usize {
        self.admitted.load(Ordering::SeqCst)
    }

    pub fn invalid(&self) -> usize {
        self.invalid.load(Ordering::SeqCst)
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }

    pub fn panicked(&self) -> usize {
        self.panicked.load(Ordering::SeqCst)
    }

    /// Get the count for one failure kind.
    pub fn failure_count(&self, kind: FetchErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total_failures(&self) -> usize {
        FetchErrorKind::iter().map(|k| self.failure_count(k)).sum()
    }

    /// Admitted URLs that have produced an outcome (or panicked).
    pub fn finished(&self) -> usize {
        self.succeeded() + self.total_failures() + self.panicked()
    }
}
