//! Per-URL task processing.
//!
//! One task per admitted URL: fetch, print the outcome, give back the gate
//! slot, then mark the unit of work finished.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use log::{debug, error};

use crate::app::Reporter;
use crate::error_handling::RunStats;
use crate::fetch::{Fetch, Outcome};

use super::resources::WorkerParams;

/// Process a single URL task.
///
/// Spawned by the dispatcher after it has acquired a gate slot and registered
/// the work. Per-URL failures never escape this function: they are printed
/// like any other outcome. A panicking fetcher is caught and logged so that
/// sibling workers and the run are unaffected.
pub async fn process_url_task<F: Fetch, R: Reporter>(params: WorkerParams<F, R>) {
    let WorkerParams {
        url,
        fetcher,
        reporter,
        stats,
        guard,
    } = params;

    let url_for_logging = url.as_str().to_string();

    match AssertUnwindSafe(fetcher.fetch(url)).catch_unwind().await {
        Ok(outcome) => {
            record_outcome(&outcome, &stats);
            reporter.outcome(&outcome);
        }
        Err(_) => {
            stats.record_panic();
            error!("Worker for {url_for_logging} panicked before producing an outcome");
        }
    }

    // Slot first, then the outstanding count (see WorkerGuard)
    drop(guard);
}

fn record_outcome(outcome: &Outcome, stats: &RunStats) {
    match outcome {
        Outcome::Success {
            url,
            size_bytes,
            elapsed,
        } => {
            stats.record_success();
            debug!("Fetched {url}: {size_bytes} bytes in {elapsed:?}");
        }
        Outcome::Failure(e) => {
            stats.record_failure(e.kind());
            match e.transport_cause() {
                Some(cause) => debug!(
                    "Failed {} ({}, {}): {e}",
                    e.url(),
                    e.kind(),
                    cause.as_str()
                ),
                None => debug!("Failed {} ({}): {e}", e.url(), e.kind()),
            }
        }
    }
}
