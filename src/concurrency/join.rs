//! Outstanding-work barrier.
//!
//! Every unit of work (each worker, plus the dispatcher while it is still
//! reading) holds a [`WorkGuard`]. [`WorkTracker::wait`] returns once all
//! guards are gone.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct TrackerInner {
    outstanding: AtomicUsize,
    all_done: Notify,
}

/// Counts outstanding units of work and lets a caller wait for zero.
#[derive(Debug, Clone, Default)]
pub struct WorkTracker {
    inner: Arc<TrackerInner>,
}

/// Keeps one unit of work outstanding until dropped.
#[derive(Debug)]
#[must_use = "the unit of work is considered finished as soon as the guard is dropped"]
pub struct WorkGuard {
    inner: Arc<TrackerInner>,
}

impl WorkTracker {
    /// Creates a tracker with nothing outstanding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one more unit of work.
    ///
    /// Must be called before the work is started so that [`wait`](Self::wait)
    /// can never observe zero while the work is being handed off.
    pub fn register(&self) -> WorkGuard {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        WorkGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Units of work registered and not yet finished.
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    /// Waits until no unit of work is outstanding.
    ///
    /// Returns immediately if nothing is registered.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.all_done.notified();
            tokio::pin!(notified);
            // Register interest before checking the count so a release between
            // the check and the await is not lost.
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Drop for WorkGuard {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.all_done.notify_waiters();
        }
    }
}
