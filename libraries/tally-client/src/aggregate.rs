//! Playlist aggregation: listing, bounded fan-out, reduction.

use crate::client::YoutubeClient;
use crate::error::Result;
use crate::reference::PlaylistReference;
use crate::types::{PlaylistStats, VideoSummary};
use futures_util::{stream, StreamExt};
use tracing::{info, warn};

impl YoutubeClient {
    /// Compute duration statistics for the playlist a reference points to.
    ///
    /// Listing failures and an empty playlist abort the call; a failed
    /// metadata lookup is absorbed into a zero-duration placeholder so a
    /// single bad entry never sinks the whole aggregation. Lookups run
    /// concurrently up to the configured cap, and results keep the order
    /// the listing returned.
    pub async fn aggregate(&self, reference: &PlaylistReference) -> Result<PlaylistStats> {
        let video_ids = self.list_playlist_items(reference.id()).await?;

        let resolutions: Vec<(VideoSummary, bool)> = stream::iter(video_ids)
            .map(|video_id| async move {
                match self.video_summary(&video_id).await {
                    Ok(summary) => (summary, true),
                    Err(err) => {
                        warn!(
                            video_id = %video_id,
                            error = %err,
                            "Video lookup failed, substituting placeholder"
                        );
                        (VideoSummary::placeholder(video_id), false)
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let unresolved_count = resolutions.iter().filter(|(_, resolved)| !resolved).count();
        let video_details: Vec<VideoSummary> =
            resolutions.into_iter().map(|(summary, _)| summary).collect();

        let total_duration: u64 = video_details.iter().map(|v| v.duration).sum();
        let average_duration = if video_details.is_empty() {
            0.0
        } else {
            total_duration as f64 / video_details.len() as f64
        };

        info!(
            playlist_id = %reference.id(),
            entries = video_details.len(),
            total_duration,
            unresolved = unresolved_count,
            "Aggregated playlist"
        );

        Ok(PlaylistStats {
            video_details,
            total_duration,
            average_duration,
            unresolved_count,
        })
    }
}
