//! HTTP client for the PokéAPI lookup service

use std::time::Duration;

use reqwest::{Client, Url};

use super::types::Pokemon;
use crate::error::LookupError;

/// Client for the `/api/v2/pokemon` endpoint and sprite downloads.
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool, so each
/// iced task gets its own handle.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/api/v2/pokemon/{key}`, encoding the key as a single segment.
    pub fn pokemon_url(&self, key: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v2", "pokemon", key]);
        Ok(url)
    }

    /// Look up one creature by name or numeric id.
    ///
    /// The key is lower-cased here so every caller gets the same path.
    pub async fn lookup(&self, query: &str) -> Result<Pokemon, LookupError> {
        let key = query.to_lowercase();
        let url = self.pokemon_url(&key)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Lookup for {:?} returned {}", key, status);
            return Err(LookupError::NotFound);
        }

        let body = response.bytes().await?;
        Pokemon::from_json(&body)
    }

    /// Download sprite bytes for the image widget.
    pub async fn fetch_sprite(&self, sprite_url: &str) -> Result<Vec<u8>, LookupError> {
        let url = Url::parse(sprite_url)
            .map_err(|e| LookupError::Transport(format!("invalid sprite url: {}", e)))?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tracing::debug!("Fetched sprite {} ({} bytes)", sprite_url, bytes.len());
        Ok(bytes.to_vec())
    }
}
