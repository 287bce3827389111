//! Playlist reference parsing.

use crate::error::{ClientError, Result};
use url::Url;

/// A user-supplied playlist reference, resolved to a playlist id.
///
/// The input is either a bare id (`PL456`) or a URL carrying the id in its
/// `list` query parameter (`https://youtube.com/watch?v=..&list=PL456`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistReference(String);

impl PlaylistReference {
    /// Parse a reference into a playlist id.
    ///
    /// Inputs that parse as a URL must carry a non-empty `list` parameter;
    /// anything else is taken as a bare id. Empty input is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ClientError::InvalidReference(
                "reference cannot be empty".into(),
            ));
        }

        // A bare id is not a valid absolute URL, so parse failure means
        // the whole input is the id.
        if let Ok(url) = Url::parse(input) {
            let id = url
                .query_pairs()
                .find(|(key, _)| key == "list")
                .map(|(_, value)| value.into_owned());

            return match id {
                Some(id) if !id.is_empty() => Ok(Self(id)),
                _ => Err(ClientError::InvalidReference(format!(
                    "no `list` parameter in URL: {input}"
                ))),
            };
        }

        Ok(Self(input.to_owned()))
    }

    /// The extracted playlist id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaylistReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
