//! Types for YouTube API requests and aggregation results.

use crate::client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Default cap on concurrent video metadata lookups.
pub(crate) const DEFAULT_CONCURRENCY: usize = 16;

/// Configuration for a [`crate::YoutubeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (overridable for tests)
    pub endpoint: String,
    /// API key sent with every request
    pub api_key: String,
    /// Cap on concurrent metadata lookups during aggregation
    pub concurrency: usize,
}

impl ClientConfig {
    /// Create a config with the given API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Override the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the metadata lookup concurrency cap.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// Resolved metadata for a single playlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: String,
    /// Duration in whole seconds; 0 when the lookup failed
    pub duration: u64,
    /// Highest-resolution thumbnail URL; empty when the lookup failed
    pub thumbnail: String,
}

impl VideoSummary {
    /// The stand-in used when a video's metadata lookup fails.
    pub(crate) fn placeholder(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            duration: 0,
            thumbnail: String::new(),
        }
    }
}

/// Aggregate duration statistics for a playlist.
///
/// Entries appear in the order the listing returned them. Placeholder
/// entries count as zero duration but still count toward the average's
/// denominator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStats {
    pub video_details: Vec<VideoSummary>,
    /// Sum of all durations in seconds
    pub total_duration: u64,
    /// Total divided by entry count, 0 when the playlist is empty
    pub average_duration: f64,
    /// Number of entries whose metadata lookup was masked with a placeholder
    pub unresolved_count: usize,
}

// =============================================================================
// Playlist Listing Wire Types
// =============================================================================

/// One page of the playlistItems endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItem {
    pub content_details: PlaylistItemDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemDetails {
    pub video_id: String,
}

// =============================================================================
// Video Lookup Wire Types
// =============================================================================

/// Response of the videos endpoint (a list even for a single-id lookup).
#[derive(Debug, Deserialize)]
pub(crate) struct VideoListPage {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoResource {
    pub snippet: Option<VideoSnippet>,
    pub content_details: Option<VideoDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoSnippet {
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoDetails {
    pub duration: Option<String>,
}

/// Thumbnail variants by resolution tier.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub maxres: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    pub fallback: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the highest-resolution variant available.
    pub(crate) fn best_url(&self) -> Option<&str> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.fallback.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}
