//! Error types for the Tally YouTube client.

use thiserror::Error;

/// Errors that can occur when talking to the YouTube Data API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned an error response
    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No API key configured
    #[error("YouTube API key is missing")]
    MissingApiKey,

    /// The configured API base URL is unusable
    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    /// The playlist reference could not be understood
    #[error("Invalid playlist reference: {0}")]
    InvalidReference(String),

    /// The playlist exists but contains no entries
    #[error("No items found in the playlist")]
    EmptyPlaylist,

    /// Failed to parse an API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
