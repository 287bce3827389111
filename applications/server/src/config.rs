/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tally_client::ClientConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_youtube")]
    pub youtube: YoutubeSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YoutubeSettings {
    /// API credential, required (set TALLY_YOUTUBE_KEY)
    #[serde(default)]
    pub key: String,

    /// API base URL, overridable for tests
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Cap on concurrent video metadata lookups
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with TALLY_)
        settings = settings.add_source(
            config::Environment::with_prefix("TALLY")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.youtube.key.trim().is_empty() {
            return Err(ServerError::Config(
                "YouTube API key is required (set TALLY_YOUTUBE_KEY)".to_string(),
            ));
        }

        Ok(())
    }

    /// Client configuration derived from the youtube section.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.youtube.key.clone())
            .with_endpoint(self.youtube.endpoint.clone())
            .with_concurrency(self.youtube.concurrency)
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_youtube() -> YoutubeSettings {
    YoutubeSettings {
        key: String::new(),
        endpoint: default_endpoint(),
        concurrency: default_concurrency(),
    }
}

fn default_endpoint() -> String {
    tally_client::DEFAULT_ENDPOINT.to_string()
}

fn default_concurrency() -> usize {
    16
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            youtube: default_youtube(),
        }
    }
}
