//! Transport error categorization.
//!
//! `reqwest::Error` only renders its outermost layer in `Display`; the useful
//! part ("connection refused", "operation timed out") lives in the source
//! chain. These helpers flatten and classify it.

use std::error::Error as StdError;

/// What went wrong at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportCause {
    /// The request timeout elapsed
    Timeout,
    /// DNS or TCP/TLS connection failure
    Connect,
    /// Redirect loop or limit
    Redirect,
    /// The request could not be built (e.g. unsupported scheme)
    Builder,
    /// Body or decoding failure
    Body,
    /// Any other failure while sending
    Request,
    /// Unclassified
    Other,
}

impl TransportCause {
    /// Short lowercase label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportCause::Timeout => "timeout",
            TransportCause::Connect => "connect",
            TransportCause::Redirect => "redirect",
            TransportCause::Builder => "builder",
            TransportCause::Body => "body",
            TransportCause::Request => "request",
            TransportCause::Other => "other",
        }
    }
}

/// Categorizes a `reqwest::Error` into a `TransportCause`.
///
/// Timeouts are checked first: a timeout while connecting is still reported
/// as a timeout.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportCause {
    if error.is_timeout() {
        TransportCause::Timeout
    } else if error.is_connect() {
        TransportCause::Connect
    } else if error.is_redirect() {
        TransportCause::Redirect
    } else if error.is_builder() {
        TransportCause::Builder
    } else if error.is_body() || error.is_decode() {
        TransportCause::Body
    } else if error.is_request() {
        TransportCause::Request
    } else {
        TransportCause::Other
    }
}

/// Renders an error followed by every cause in its source chain, separated by `": "`.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    describe_error_chain(error)
}

fn describe_error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
