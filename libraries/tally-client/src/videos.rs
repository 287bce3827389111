//! Per-video metadata lookup.

use crate::client::YoutubeClient;
use crate::duration;
use crate::error::{ClientError, Result};
use crate::types::{VideoListPage, VideoSummary};
use tracing::debug;

impl YoutubeClient {
    /// Resolve duration and thumbnail for a single video.
    ///
    /// The duration arrives ISO-8601 encoded and is decoded to seconds;
    /// the thumbnail is the highest-resolution variant the API returned.
    pub async fn video_summary(&self, video_id: &str) -> Result<VideoSummary> {
        let url = format!("{}/videos", self.endpoint);
        debug!(url = %url, video_id = %video_id, "Fetching video metadata");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: VideoListPage = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("invalid videos response: {e}")))?;

        let video = page.items.into_iter().next().ok_or_else(|| {
            ClientError::ParseError(format!("video not found: {video_id}"))
        })?;

        let encoded = video
            .content_details
            .and_then(|details| details.duration)
            .ok_or_else(|| {
                ClientError::ParseError(format!("no duration for video: {video_id}"))
            })?;

        let thumbnail = video
            .snippet
            .as_ref()
            .and_then(|snippet| snippet.thumbnails.best_url())
            .unwrap_or_default()
            .to_string();

        Ok(VideoSummary {
            video_id: video_id.to_owned(),
            duration: duration::decode(&encoded),
            thumbnail,
        })
    }
}
