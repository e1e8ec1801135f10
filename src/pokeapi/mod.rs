//! PokeAPI Module
//!
//! Cache-aware HTTP client for the PokeAPI resources the REPL uses.
//!
//! # Endpoints
//! - `GET location-area?offset=&limit=` - Paginated location areas
//! - `GET location-area/{name}` - Pokemon encounters in one area
//! - `GET pokemon/{name}` - A single pokemon

pub mod client;

pub use client::PokeApiClient;

/// Location area collection endpoint
pub const LOCATION_AREA_ENDPOINT: &str = "location-area";

/// Pokemon endpoint
pub const POKEMON_ENDPOINT: &str = "pokemon";

/// Pagination query keys
pub const OFFSET_KEY: &str = "offset";
pub const LIMIT_KEY: &str = "limit";
