//! Configuration Module
//!
//! Handles loading and managing Pokedex configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI root URL, always ending in `/`
    pub base_url: String,
    /// Response cache TTL in seconds (also the sweep interval)
    pub cache_ttl: u64,
    /// Location areas shown per `map`/`mapb` page
    pub page_size: u32,
    /// A catch succeeds when the roll is at or below this value
    pub catch_threshold: u32,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - PokeAPI root URL (default: https://pokeapi.co/api/v2/)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_CATCH_THRESHOLD` - Catch roll threshold (default: 40)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 10)
    ///
    /// Unparseable or zero values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            cache_ttl: positive_var("POKEDEX_CACHE_TTL").unwrap_or(defaults.cache_ttl),
            page_size: positive_var("POKEDEX_PAGE_SIZE").unwrap_or(defaults.page_size),
            catch_threshold: env::var("POKEDEX_CATCH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.catch_threshold),
            http_timeout: positive_var("POKEDEX_HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
        }
    }

    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Returns the HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: 300,
            page_size: 20,
            catch_threshold: 40,
            http_timeout: 10,
        }
    }
}

/// Reads a numeric variable, treating zero like a missing value.
fn positive_var<T>(name: &str) -> Option<T>
where
    T: FromStr + PartialEq + Default,
{
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v != T::default())
}

/// Ensures the base URL ends with exactly one `/` so endpoints can be appended.
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}
