//! Run summary logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FetchErrorKind, RunStats};

/// Logs the counters of a finished run.
///
/// Goes through the logger (stderr), never stdout: the printed output of a
/// run carries no aggregate counts.
///
/// # Arguments
///
/// * `start_time` - When the run started
/// * `stats` - Counters collected during the run
pub fn log_run_summary(start_time: std::time::Instant, stats: &RunStats) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let finished = stats.finished();
    let rate = if elapsed_secs > 0.0 {
        finished as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} urls in {:.2} seconds (~{:.2} urls/sec): {} succeeded, {} failed, {} invalid lines",
        finished,
        elapsed_secs,
        rate,
        stats.succeeded(),
        stats.total_failures(),
        stats.invalid()
    );

    for kind in FetchErrorKind::iter() {
        let count = stats.failure_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }

    if stats.panicked() > 0 {
        log::warn!("{} worker(s) panicked without reporting", stats.panicked());
    }
}
