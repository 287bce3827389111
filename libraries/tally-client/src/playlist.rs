//! Paginated playlist-item listing.

use crate::client::YoutubeClient;
use crate::error::{ClientError, Result};
use crate::types::PlaylistItemsPage;
use tracing::debug;

/// Page size requested from the playlistItems endpoint.
const PAGE_SIZE: &str = "50";

impl YoutubeClient {
    /// List the video ids of every entry in a playlist.
    ///
    /// Pages are fetched strictly sequentially: each request needs the
    /// continuation token of the previous response, and the loop stops
    /// when a response carries none. Entries keep retrieval order.
    pub async fn list_playlist_items(&self, playlist_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/playlistItems", self.endpoint);

        let mut video_ids = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0u32;

        loop {
            debug!(
                url = %url,
                playlist_id = %playlist_id,
                page = pages,
                "Fetching playlist page"
            );

            let mut request = self.http.get(&url).query(&[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", PAGE_SIZE),
                ("key", self.api_key.as_str()),
            ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;
            let status = response.status();

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let page: PlaylistItemsPage = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("invalid playlistItems response: {e}"))
            })?;

            video_ids.extend(
                page.items
                    .into_iter()
                    .map(|item| item.content_details.video_id),
            );
            pages += 1;

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        if video_ids.is_empty() {
            return Err(ClientError::EmptyPlaylist);
        }

        debug!(
            playlist_id = %playlist_id,
            entries = video_ids.len(),
            pages,
            "Listed playlist"
        );

        Ok(video_ids)
    }
}
