//! Error type definitions.
//!
//! This module defines the errors a run can produce: fatal setup failures,
//! per-line validation failures, and per-URL fetch failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::{categorize_reqwest_error, describe_reqwest_error, TransportCause};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A line that is not a well-formed absolute URL.
///
/// Never fatal: the line is reported and dropped before it can take a gate slot.
#[derive(Error, Debug)]
pub enum InvalidUrl {
    /// The line does not parse as a URL at all.
    #[error("invalid url \"{line}\": {source}")]
    Syntax {
        /// The offending input line
        line: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// The line parses but has no host (e.g. `mailto:` or `data:` URLs).
    #[error("invalid url \"{line}\": missing host")]
    MissingHost {
        /// The offending input line
        line: String,
    },

    /// The line is not valid UTF-8. `line` is a lossy rendering of it.
    #[error("invalid url \"{line}\": line is not valid UTF-8")]
    NotUtf8 {
        /// The offending input line, invalid bytes replaced
        line: String,
    },

    /// The line exceeds `MAX_URL_LENGTH`.
    #[error("invalid url: length {length} exceeds maximum of {max}")]
    TooLong {
        /// Length of the rejected line
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum FetchErrorKind {
    /// Transport failure: DNS, connect, TLS, timeout
    ClientError,
    /// The server answered with status >= 400
    UnavailableError,
    /// The response body could not be read to the end
    ReadError,
}

impl FetchErrorKind {
    /// Returns a human-readable name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::ClientError => "Client error",
            FetchErrorKind::UnavailableError => "Unavailable error",
            FetchErrorKind::ReadError => "Read error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-URL failure.
///
/// The `Display` text is exactly what gets printed for the URL.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or no response arrived in time.
    #[error("client: {}", describe_reqwest_error(.source))]
    Client {
        /// Requested URL, as written in the input
        url: String,
        /// Transport error
        #[source]
        source: ReqwestError,
    },

    /// The server responded with a status code of 400 or above.
    #[error("client: url {url} unavailable: status code {status}")]
    Unavailable {
        /// Requested URL, as written in the input
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The status was fine but reading the body failed.
    #[error("client: cannot read body: {}", describe_reqwest_error(.source))]
    Read {
        /// Requested URL, as written in the input
        url: String,
        /// Body read error
        #[source]
        source: ReqwestError,
    },
}

impl FetchError {
    /// The kind of failure.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Client { .. } => FetchErrorKind::ClientError,
            FetchError::Unavailable { .. } => FetchErrorKind::UnavailableError,
            FetchError::Read { .. } => FetchErrorKind::ReadError,
        }
    }

    /// The URL the failure belongs to.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Client { url, .. }
            | FetchError::Unavailable { url, .. }
            | FetchError::Read { url, .. } => url,
        }
    }

    /// Whether the underlying transport error was the request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Client { source, .. } | FetchError::Read { source, .. } => {
                source.is_timeout()
            }
            FetchError::Unavailable { .. } => false,
        }
    }

    /// Transport-level category, when the failure came from the transport.
    pub fn transport_cause(&self) -> Option<TransportCause> {
        match self {
            FetchError::Client { source, .. } | FetchError::Read { source, .. } => {
                Some(categorize_reqwest_error(source))
            }
            FetchError::Unavailable { .. } => None,
        }
    }
}

/// The gate was closed before an acquisition.
///
/// Only the dispatcher acquires slots and it closes the gate after its last
/// acquisition, so seeing this is a bug.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("admission gate is closed")]
pub struct GateClosed;
