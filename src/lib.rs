//! url_processor library: bounded-concurrency URL fetching
//!
//! This library reads a list of URLs, fetches each one with HTTP GET while
//! never running more than a fixed number of requests at once, and reports one
//! line per URL: the body size and elapsed time on success, or the reason for
//! the failure.
//!
//! # Example
//!
//! ```no_run
//! use url_processor::{run_urls, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     concurrency_limit: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_urls(&config).await?;
//! eprintln!("{} succeeded, {} failed", report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
mod concurrency;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod run;

// Re-export public API
pub use app::{decode_line, is_skippable, validate_url, ConsoleReporter, Reporter, ValidatedUrl};
pub use concurrency::{AdmissionGate, GateSlot, WorkGuard, WorkTracker};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{
    FetchError, FetchErrorKind, GateClosed, InitializationError, InvalidUrl, TransportCause,
};
pub use fetch::{Fetch, HttpFetcher, Outcome};
pub use run::{run_pipeline, run_urls, RunReport, UrlSource};
