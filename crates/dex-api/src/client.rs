//! HTTP client for the public creature-data API.
//!
//! A thin wrapper over the two endpoints this application uses: the paged
//! list and the per-record detail. No caching and no retries - every call
//! is a fresh round-trip and failures propagate unchanged.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use dex_model::Record;

use crate::error::{ApiError, Result};
use crate::types::PageList;

/// Base URL of the public API.
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP request timeout. Transport-level; this layer imposes nothing else.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the creature-data API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client.
    client: Client,
    /// Base URL, overridable for tests.
    base_url: String,
}

impl ApiClient {
    /// Create a client against the public API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL of the paged list endpoint.
    fn list_url(&self, offset: u32, limit: u32) -> String {
        format!("{}/pokemon?offset={offset}&limit={limit}", self.base_url)
    }

    /// URL of the detail endpoint for a name or numeric identifier.
    fn detail_url(&self, key: &str) -> String {
        format!("{}/pokemon/{key}", self.base_url)
    }

    /// Fetch one page of record summaries.
    pub async fn list_page(&self, offset: u32, limit: u32) -> Result<PageList> {
        debug!(offset, limit, "Fetching record list page");

        let response = self
            .client
            .get(self.list_url(offset, limit))
            .header(USER_AGENT, user_agent())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Network(format!(
                "HTTP {} from list endpoint",
                response.status().as_u16()
            )));
        }

        let page = response.json::<PageList>().await?;
        Ok(page)
    }

    /// Fetch the full record for a name.
    pub async fn get_by_name(&self, name: &str) -> Result<Record> {
        debug!(name, "Fetching record detail");
        self.get_detail(name).await
    }

    /// Fetch the full record for a numeric identifier.
    pub async fn get_by_id(&self, id: u32) -> Result<Record> {
        debug!(id, "Fetching record detail");
        self.get_detail(&id.to_string()).await
    }

    async fn get_detail(&self, key: &str) -> Result<Record> {
        let response = self
            .client
            .get(self.detail_url(key))
            .header(USER_AGENT, user_agent())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Err(ApiError::NotFound(key.to_string()));
        }

        if !response.status().is_success() {
            return Err(ApiError::Network(format!(
                "HTTP {} from detail endpoint",
                response.status().as_u16()
            )));
        }

        let record = response.json::<Record>().await?;
        Ok(record)
    }

    /// Fetch raw bytes from an absolute URL, used for sprite images.
    ///
    /// Sprite URLs come straight from record payloads and point at a CDN,
    /// not at the API base, so this takes the full URL.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "Fetching image bytes");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent())
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Err(ApiError::NotFound(url.to_string()));
        }

        if !response.status().is_success() {
            return Err(ApiError::Network(format!(
                "HTTP {} from image host",
                response.status().as_u16()
            )));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// User agent sent with every request.
fn user_agent() -> String {
    format!("pokedex-desktop/{}", env!("CARGO_PKG_VERSION"))
}
