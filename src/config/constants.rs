//! Configuration constants.
//!
//! Defaults for the command-line options and fixed limits used while reading
//! and fetching URLs.

/// Default number of requests allowed in flight at once (admission gate capacity)
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 50;

/// Default total timeout for one HTTP request, in seconds (connect + read)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("url_processor/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length (2048 characters).
/// Matches common browser and server limits (IE, Apache, Nginx defaults).
pub const MAX_URL_LENGTH: usize = 2048;

/// Input path that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Printed once after every admitted URL has produced its outcome
pub const COMPLETION_MESSAGE: &str = "All urls processed";
