//! Fetching a single URL.
//!
//! One GET per admitted URL, no retries. The response body is streamed and
//! counted rather than buffered, so memory use does not depend on body size.

mod outcome;


use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use log::trace;

use crate::app::ValidatedUrl;
use crate::error_handling::FetchError;

pub use outcome::Outcome;

/// Something that turns a validated URL into an `Outcome`.
///
/// Workers only see this trait; the HTTP implementation is [`HttpFetcher`].
/// Implementations must not panic on network errors and must report every
/// failure as an `Outcome::Failure`.
pub trait Fetch: Send + Sync + 'static {
    /// Performs exactly one attempt for `url`.
    fn fetch(&self, url: ValidatedUrl) -> impl Future<Output = Outcome> + Send;
}

/// Fetches over HTTP with a shared `reqwest::Client`.
///
/// The client (and its connection pool) is built once with the run's timeout
/// and shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Wraps a client built by `init_client`.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: ValidatedUrl) -> Outcome {
        process(&self.client, url).await
    }
}

/// Issues one GET request and classifies the result.
///
/// - send failure (DNS, connect, timeout) -> `FetchError::Client`
/// - status >= 400 -> `FetchError::Unavailable`; the body is not read
/// - body read failure -> `FetchError::Read`
/// - otherwise `Outcome::Success` with the drained body size and elapsed time
///
/// The response is dropped on every path, which returns or closes its
/// connection.
pub async fn process(client: &reqwest::Client, url: ValidatedUrl) -> Outcome {
    let start_time = Instant::now();

    let mut response = match client.get(url.parsed().clone()).send().await {
        Ok(response) => response,
        Err(source) => {
            return FetchError::Client {
                url: url.as_str().to_string(),
                source,
            }
            .into();
        }
    };

    let status = response.status();
    trace!("{} responded with {}", url, status);
    if status.as_u16() >= 400 {
        return FetchError::Unavailable {
            url: url.as_str().to_string(),
            status: status.as_u16(),
        }
        .into();
    }

    let mut size_bytes: u64 = 0;
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => size_bytes += chunk.len() as u64,
            Ok(None) => break,
            Err(source) => {
                return FetchError::Read {
                    url: url.as_str().to_string(),
                    source,
                }
                .into();
            }
        }
    }

    Outcome::Success {
        url: url.as_str().to_string(),
        size_bytes,
        elapsed: start_time.elapsed(),
    }
}
