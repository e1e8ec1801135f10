//! PokeAPI client
//!
//! Fetches and decodes PokeAPI resources, consulting the response cache before
//! every request and populating it after every fully successful decode.

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::{LIMIT_KEY, LOCATION_AREA_ENDPOINT, OFFSET_KEY, POKEMON_ENDPOINT};
use crate::cache::ExpiringCache;
use crate::config::{normalize_base_url, Config};
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetails, LocationAreaPage, Pokemon};

/// HTTP client for PokeAPI backed by an [`ExpiringCache`].
///
/// Cache keys are the exact request URLs, query string included, so every
/// pagination offset is cached on its own. The cache holds the JSON encoding
/// of the decoded response, never a raw or partial body.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: ExpiringCache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for `config.base_url` that reads through `cache`.
    pub fn new(config: &Config, cache: ExpiringCache) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(http, &config.base_url, cache))
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_http_client(http: Client, base_url: &str, cache: ExpiringCache) -> Self {
        Self {
            http,
            cache,
            base_url: normalize_base_url(base_url),
        }
    }

    /// Returns the response cache this client reads through.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Returns the PokeAPI root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == URL Builders ==
    /// URL of the location area page starting at `offset`.
    pub fn location_areas_url(&self, offset: u32, limit: u32) -> String {
        format!(
            "{}{LOCATION_AREA_ENDPOINT}?{OFFSET_KEY}={offset}&{LIMIT_KEY}={limit}",
            self.base_url
        )
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, area: &str) -> String {
        format!("{}{LOCATION_AREA_ENDPOINT}/{area}", self.base_url)
    }

    /// URL of a single pokemon.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}{POKEMON_ENDPOINT}/{name}", self.base_url)
    }

    // == Resources ==
    /// Fetches one page of location areas from a fully-qualified page URL.
    ///
    /// The URL is usually the `next`/`previous` link of a previous page.
    pub async fn location_areas(&self, page_url: &str) -> Result<LocationAreaPage> {
        self.fetch(page_url).await
    }

    /// Fetches the encounter list of a location area.
    pub async fn explore_area(&self, area: &str) -> Result<LocationAreaDetails> {
        self.fetch(&self.location_area_url(area)).await
    }

    /// Fetches a pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.pokemon_url(name)).await
    }

    // == Fetch ==
    /// Returns the decoded resource at `url`, from the cache when possible.
    ///
    /// On a miss the body is decoded, re-encoded and only then stored. Network
    /// errors, non-200 statuses and malformed bodies are returned without
    /// touching the cache.
    async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(bytes) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(serde_json::from_slice(&bytes)?);
        }

        debug!(url, "cache miss, requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            info!(url, %status, "request rejected");
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        let data: T = serde_json::from_slice(&body)?;
        let encoded = serde_json::to_vec(&data)?;
        self.cache.put(url, encoded);

        Ok(data)
    }
}
