// Shared test helpers for input files, reporters and instrumented fetchers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::NamedTempFile;
use url_processor::{Config, Fetch, InvalidUrl, LogFormat, LogLevel, Outcome, Reporter, ValidatedUrl};

/// Writes one line per entry to a temporary file.
pub fn write_urls_to_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write URL");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Creates a Config for tests with a short timeout and quiet logging.
pub fn create_test_config(concurrency_limit: usize, request_timeout: Duration) -> Config {
    Config {
        concurrency_limit,
        request_timeout,
        user_agent: "url_processor_test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Records every line a run would print, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub stdout: Mutex<Vec<String>>,
    pub stderr: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().expect("poisoned").clone()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.stderr.lock().expect("poisoned").clone()
    }
}

/// Shared handle so the test keeps access after the run takes ownership.
#[derive(Debug, Default, Clone)]
pub struct SharedReporter(pub Arc<RecordingReporter>);

impl Reporter for SharedReporter {
    fn outcome(&self, outcome: &Outcome) {
        self.0.stdout.lock().expect("poisoned").push(outcome.to_string());
    }

    fn invalid_line(&self, error: &InvalidUrl) {
        self.0.stderr.lock().expect("poisoned").push(error.to_string());
    }

    fn finished(&self) {
        self.0
            .stdout
            .lock()
            .expect("poisoned")
            .push("All urls processed".to_string());
    }
}

/// Wraps another fetcher and tracks how many calls are in flight.
#[derive(Debug)]
pub struct GaugedFetch<F> {
    pub inner: F,
    pub active: Arc<AtomicUsize>,
    pub max_active: Arc<AtomicUsize>,
}

impl<F> GaugedFetch<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            active: Arc::new(AtomicUsize::new(0)),
            max_active: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<F: Fetch> Fetch for GaugedFetch<F> {
    async fn fetch(&self, url: ValidatedUrl) -> Outcome {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        let outcome = self.inner.fetch(url).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
