//! Tally YouTube Client
//!
//! HTTP client library for the YouTube Data API v3, focused on one job:
//! turning a playlist reference into aggregate duration statistics.
//!
//! # Features
//!
//! - **Reference parsing**: accept a bare playlist id or a URL with a
//!   `list` query parameter
//! - **Listing**: paginated playlist-item retrieval via continuation tokens
//! - **Lookup**: per-video duration and thumbnail resolution
//! - **Aggregation**: total and average duration over every entry
//!
//! # Example
//!
//! ```ignore
//! use tally_client::{ClientConfig, PlaylistReference, YoutubeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YoutubeClient::new(ClientConfig::new("api-key"))?;
//!
//!     let reference = PlaylistReference::parse("https://youtube.com/playlist?list=PL123")?;
//!     let stats = client.aggregate(&reference).await?;
//!
//!     println!(
//!         "{} videos, {} seconds total, {:.1} seconds on average",
//!         stats.video_details.len(),
//!         stats.total_duration,
//!         stats.average_duration
//!     );
//!     Ok(())
//! }
//! ```

mod aggregate;
mod client;
pub mod duration;
mod error;
mod playlist;
mod reference;
mod types;
mod videos;

// Re-export main types
pub use client::{YoutubeClient, DEFAULT_ENDPOINT};
pub use error::{ClientError, Result};
pub use reference::PlaylistReference;
pub use types::{ClientConfig, PlaylistStats, VideoSummary};
