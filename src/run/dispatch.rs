//! The producer side of a run.
//!
//! The dispatcher reads lines in input order, validates them, and hands every
//! valid URL to its own worker task once a gate slot is free. Waiting for a
//! slot is the only backpressure: no more than `capacity` URLs are in flight
//! and no line is read ahead of a free slot.

use std::sync::Arc;

use log::{debug, error, trace, warn};

use crate::app::{decode_line, is_skippable, validate_url, Reporter};
use crate::concurrency::{AdmissionGate, WorkGuard, WorkTracker};
use crate::error_handling::{InvalidUrl, RunStats};
use crate::fetch::Fetch;

use super::resources::{UrlSource, WorkerGuard, WorkerParams};
use super::task::process_url_task;

/// What the dispatcher saw while reading its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Valid URLs handed to a worker
    pub admitted: usize,
    /// Lines rejected by validation
    pub invalid: usize,
    /// Blank and comment lines
    pub skipped: usize,
}

/// Single producer feeding worker tasks through an [`AdmissionGate`].
pub struct Dispatcher<F: Fetch, R: Reporter> {
    fetcher: Arc<F>,
    reporter: Arc<R>,
    gate: AdmissionGate,
    tracker: WorkTracker,
    stats: Arc<RunStats>,
}

impl<F: Fetch, R: Reporter> Dispatcher<F, R> {
    pub fn new(
        fetcher: Arc<F>,
        reporter: Arc<R>,
        gate: AdmissionGate,
        tracker: WorkTracker,
        stats: Arc<RunStats>,
    ) -> Self {
        Self {
            fetcher,
            reporter,
            gate,
            tracker,
            stats,
        }
    }

    /// Reads `source` to the end, spawning one worker per valid URL.
    ///
    /// `producer` is the dispatcher's own unit of outstanding work; it is
    /// dropped last, after the gate has been closed, so the barrier cannot
    /// finish while lines may still be admitted.
    ///
    /// End of input and read errors both end the reading phase.
    pub async fn dispatch(self, mut source: UrlSource, producer: WorkGuard) -> DispatchSummary {
        let mut summary = DispatchSummary::default();

        loop {
            let line = match source.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read line from input, no more urls will be read: {e}");
                    break;
                }
            };

            let line = match decode_line(line) {
                Ok(line) => line,
                Err(e) => {
                    self.reject(&e, &mut summary);
                    continue;
                }
            };

            let trimmed = line.trim();
            if is_skippable(trimmed) {
                if !trimmed.is_empty() {
                    debug!("Skipping comment line: {trimmed}");
                }
                summary.skipped += 1;
                continue;
            }

            let url = match validate_url(trimmed) {
                Ok(url) => url,
                Err(e) => {
                    self.reject(&e, &mut summary);
                    continue;
                }
            };

            let slot = match self.gate.acquire().await {
                Ok(slot) => slot,
                Err(e) => {
                    error!("Cannot admit {url}: {e}. This indicates a bug in the dispatcher.");
                    break;
                }
            };

            // Registered before the spawn so the barrier never sees a false zero
            let work = self.tracker.register();
            summary.admitted += 1;
            self.stats.record_admitted();
            trace!(
                "Admitted {url} ({}/{} slots in use)",
                self.gate.in_use(),
                self.gate.capacity()
            );

            tokio::spawn(process_url_task(WorkerParams {
                url,
                fetcher: Arc::clone(&self.fetcher),
                reporter: Arc::clone(&self.reporter),
                stats: Arc::clone(&self.stats),
                guard: WorkerGuard { slot, work },
            }));
        }

        self.gate.close();
        debug!(
            "Input exhausted: {} admitted, {} invalid, {} skipped",
            summary.admitted, summary.invalid, summary.skipped
        );
        drop(producer);
        summary
    }

    fn reject(&self, error: &InvalidUrl, summary: &mut DispatchSummary) {
        debug!("Dropping invalid line: {error}");
        summary.invalid += 1;
        self.stats.record_invalid();
        self.reporter.invalid_line(error);
    }
}
