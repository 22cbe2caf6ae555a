//! Top-level run: read, admit, fetch, wait, report.
//!
//! The main flow only opens the input and builds shared resources. It then
//! hands the input to a [`dispatch::Dispatcher`] task and parks on the
//! [`WorkTracker`] barrier until the dispatcher and every worker it spawned
//! have finished.

mod dispatch;
pub(crate) mod resources;
mod task;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};

use crate::app::{log_run_summary, ConsoleReporter, Reporter};
use crate::concurrency::WorkTracker;
use crate::config::Config;
use crate::error_handling::RunStats;
use crate::fetch::{Fetch, HttpFetcher};
use crate::initialization::{init_client, init_gate};

pub use dispatch::DispatchSummary;
pub use resources::UrlSource;

/// Results of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// URLs that passed validation and were fetched
    pub admitted: usize,
    /// Fetches that produced a success line
    pub succeeded: usize,
    /// Fetches that produced a failure line
    pub failed: usize,
    /// Lines rejected by validation
    pub invalid: usize,
    /// Blank and comment lines
    pub skipped: usize,
    /// Workers that panicked instead of producing an outcome
    pub panicked: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs the URL list named by `config` and prints every outcome to stdout.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// This function will return an error if:
/// - The input file cannot be opened
/// - The HTTP client cannot be built (e.g. an invalid user agent)
///
/// Per-URL failures are never errors: they are printed and counted.
///
/// # Example
///
/// ```no_run
/// use url_processor::{run_urls, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     ..Default::default()
/// };
/// let report = run_urls(&config).await?;
/// println!("Fetched {} urls", report.admitted);
/// # Ok(())
/// # }
/// ```
pub async fn run_urls(config: &Config) -> Result<RunReport> {
    let source = UrlSource::open(&config.file)
        .await
        .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    info!(
        "Starting run: concurrency limit {}, request timeout {:?}",
        config.concurrency_limit, config.request_timeout
    );

    Ok(run_pipeline(
        config.concurrency_limit,
        source,
        HttpFetcher::new(client),
        ConsoleReporter,
    )
    .await)
}

/// Runs an already opened source through the gate with the given fetcher and
/// reporter.
///
/// Returns once every admitted URL has been reported and the completion
/// marker has been emitted.
pub async fn run_pipeline<F, R>(
    concurrency_limit: usize,
    source: UrlSource,
    fetcher: F,
    reporter: R,
) -> RunReport
where
    F: Fetch,
    R: Reporter,
{
    let start_time = Instant::now();
    let reporter = Arc::new(reporter);
    let stats = Arc::new(RunStats::new());
    let gate = init_gate(concurrency_limit);
    let tracker = WorkTracker::new();

    // Held by the dispatcher until its input is exhausted
    let producer = tracker.register();
    let dispatcher = dispatch::Dispatcher::new(
        Arc::new(fetcher),
        Arc::clone(&reporter),
        gate,
        tracker.clone(),
        Arc::clone(&stats),
    );
    let dispatch_handle = tokio::spawn(dispatcher.dispatch(source, producer));

    tracker.wait().await;

    let summary = match dispatch_handle.await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Dispatcher task failed: {e}");
            DispatchSummary::default()
        }
    };

    reporter.finished();
    log_run_summary(start_time, &stats);
    info!("Skipped {} blank or comment lines", summary.skipped);

    RunReport {
        admitted: stats.admitted(),
        succeeded: stats.succeeded(),
        failed: stats.total_failures(),
        invalid: stats.invalid(),
        skipped: summary.skipped,
        panicked: stats.panicked(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::app::ValidatedUrl;
    use crate::error_handling::{FetchError, InvalidUrl};
    use crate::fetch::Outcome;

    #[derive(Default)]
    struct Transcript {
        lines: Mutex<Vec<String>>,
    }

    impl Reporter for Arc<Transcript> {
        fn outcome(&self, outcome: &Outcome) {
            self.lines.lock().expect("poisoned").push(outcome.to_string());
        }
        fn invalid_line(&self, _error: &InvalidUrl) {}
        fn finished(&self) {
            self.lines.lock().expect("poisoned").push("<done>".to_string());
        }
    }

    struct SlowThenFail;

    impl Fetch for SlowThenFail {
        async fn fetch(&self, url: ValidatedUrl) -> Outcome {
            tokio::time::sleep(Duration::from_millis(30)).await;
            FetchError::Unavailable {
                url: url.as_str().to_string(),
                status: 500,
            }
            .into()
        }
    }

    #[tokio::test]
    async fn test_completion_comes_after_every_outcome() {
        let transcript = Arc::new(Transcript::default());
        let report = run_pipeline(
            2,
            UrlSource::from_reader(&b"http://a.example/\nhttp://b.example/\nhttp://c.example/\n"[..]),
            SlowThenFail,
            Arc::clone(&transcript),
        )
        .await;

        let lines = transcript.lines.lock().expect("poisoned");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.last().map(String::as_str), Some("<done>"));
        assert_eq!(
            lines.iter().filter(|l| l.contains("status code 500")).count(),
            3
        );
        assert_eq!(report.admitted, 3);
        assert_eq!(report.failed, 3);
        assert_eq!(report.succeeded, 0);
    }

    #[tokio::test]
    async fn test_empty_input_still_finishes() {
        let transcript = Arc::new(Transcript::default());
        let report = run_pipeline(
            5,
            UrlSource::from_reader(&b""[..]),
            SlowThenFail,
            Arc::clone(&transcript),
        )
        .await;

        assert_eq!(
            transcript.lines.lock().expect("poisoned").as_slice(),
            ["<done>"]
        );
        assert_eq!(report.admitted, 0);
    }

    #[tokio::test]
    async fn test_run_urls_missing_file_is_an_error() {
        let config = Config {
            file: "/definitely/not/here/urls.txt".into(),
            ..Default::default()
        };
        let err = run_urls(&config).await.expect_err("missing file must fail");
        assert!(format!("{err:#}").contains("Failed to open input file"));
    }
}
