//! HTTP client for PokeAPI-compatible providers.

use super::{DataProvider, RawMove, RawPokemon, RawType};
use crate::config::DuelConfig;
use crate::errors::{DataError, DataResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Fetches raw records over HTTP.
///
/// Entities are requested from `{base_url}/pokemon/{id}`; moves and types are
/// requested from the absolute URL found in the parent record. Failures are
/// reported immediately, with no retry.
pub struct PokeApiClient {
    /// API root, without a trailing slash
    base_url: String,

    /// HTTP client
    http_client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &DuelConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn entity_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, record: &'static str) -> DataResult<T> {
        tracing::debug!(url, record, "fetching record");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|err| DataError::fetch(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::fetch(url, format!("HTTP status {}", status)));
        }

        // Read the body first so transport and decode failures stay distinct.
        let body = response
            .text()
            .await
            .map_err(|err| DataError::fetch(url, err))?;

        serde_json::from_str(&body).map_err(|err| DataError::parse(record, err.to_string()))
    }
}

#[async_trait]
impl DataProvider for PokeApiClient {
    async fn fetch_entity(&self, id: u32) -> DataResult<RawPokemon> {
        let url = self.entity_url(id);
        self.get_json(&url, "pokemon").await
    }

    async fn fetch_move(&self, reference: &str) -> DataResult<RawMove> {
        self.get_json(reference, "move").await
    }

    async fn fetch_type(&self, reference: &str) -> DataResult<RawType> {
        self.get_json(reference, "type").await
    }
}
