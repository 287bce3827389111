/// Shared application state
use std::sync::Arc;
use tally_client::YoutubeClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<YoutubeClient>,
}

impl AppState {
    pub fn new(client: Arc<YoutubeClient>) -> Self {
        Self { client }
    }
}
