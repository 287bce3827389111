//! Main YouTube API client.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use reqwest::Client;
use std::time::Duration;

/// Default base URL of the YouTube Data API v3.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the YouTube Data API v3.
///
/// Listing, lookup, and aggregation operations live in their own modules;
/// this type holds the shared HTTP client and request parameters.
pub struct YoutubeClient {
    pub(crate) http: Client,
    pub(crate) endpoint: String,
    pub(crate) api_key: String,
    pub(crate) concurrency: usize,
}

impl YoutubeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        // Parse and normalize the endpoint URL
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ClientError::InvalidEndpoint(format!(
                "must start with http:// or https://: {endpoint}"
            )));
        }

        // HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tally/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key,
            concurrency: config.concurrency.max(1),
        })
    }

    /// The normalized API base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = YoutubeClient::new(ClientConfig::new(""));
        assert!(matches!(result, Err(ClientError::MissingApiKey)));

        let result = YoutubeClient::new(ClientConfig::new("   "));
        assert!(matches!(result, Err(ClientError::MissingApiKey)));
    }

    #[test]
    fn test_endpoint_normalization() {
        let client = YoutubeClient::new(
            ClientConfig::new("key").with_endpoint("https://example.com/v3/"),
        )
        .expect("valid config");
        assert_eq!(client.endpoint(), "https://example.com/v3");
    }

    #[test]
    fn test_endpoint_without_scheme_rejected() {
        let result =
            YoutubeClient::new(ClientConfig::new("key").with_endpoint("example.com/v3"));
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrency_floor() {
        let client =
            YoutubeClient::new(ClientConfig::new("key").with_concurrency(0)).expect("valid");
        assert_eq!(client.concurrency, 1);
    }
}
