//! Pokedex - A PokeAPI explorer
//!
//! Provides an interactive REPL over PokeAPI with an expiring in-memory
//! response cache swept by a background task.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokeapi::PokeApiClient;
