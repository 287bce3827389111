/// Playlist statistics API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use tally_client::{PlaylistReference, PlaylistStats};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatsRequest {
    /// Playlist URL or bare playlist id
    #[serde(default)]
    pub playlist_url: String,
}

/// POST /api/playlist
/// Aggregate duration statistics for every item in a playlist
pub async fn playlist_stats(
    State(app_state): State<AppState>,
    Json(req): Json<PlaylistStatsRequest>,
) -> Result<Json<PlaylistStats>> {
    let reference = PlaylistReference::parse(&req.playlist_url)?;
    let stats = app_state.client.aggregate(&reference).await?;
    Ok(Json(stats))
}
