//! The terminal result of processing one URL.

use std::fmt;
use std::time::Duration;

use crate::error_handling::FetchError;

/// Either a fully read response or a classified failure.
///
/// Produced exactly once per admitted URL and printed right away.
#[derive(Debug)]
pub enum Outcome {
    /// The body was read to the end.
    Success {
        /// Requested URL, as written in the input
        url: String,
        /// Total bytes in the response body
        size_bytes: u64,
        /// Time from just before sending the request until the body was drained
        elapsed: Duration,
    },
    /// The request failed.
    Failure(FetchError),
}

impl Outcome {
    /// The URL this outcome belongs to, as written in the input.
    pub fn url(&self) -> &str {
        match self {
            Outcome::Success { url, .. } => url,
            Outcome::Failure(error) => error.url(),
        }
    }

    /// Whether the fetch succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

impl From<FetchError> for Outcome {
    fn from(error: FetchError) -> Self {
        Outcome::Failure(error)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success {
                url,
                size_bytes,
                elapsed,
            } => write!(f, "url: {url} size: {size_bytes} bytes time: {elapsed:?}"),
            Outcome::Failure(error) => write!(f, "{error}"),
        }
    }
}
