//! PokeAPI response models
//!
//! This module defines the serde types decoded from PokeAPI responses. Every
//! type is also `Serialize` so a decoded response can be re-encoded into the
//! response cache.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetails, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::{Deserialize, Serialize};

/// A `{ name, url }` link to another PokeAPI resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
