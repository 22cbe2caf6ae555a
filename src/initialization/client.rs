//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// The client carries the run's total request timeout (connect + headers +
/// body) and User-Agent. It is built once, before any request, and shared
/// read-only by all workers; its connection pool is safe for concurrent use.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_bad_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            request_timeout: Duration::from_secs(1),
            ..Default::default()
        };
        assert!(init_client(&config).is_err());
    }
}
