//! Location area models
//!
//! Defines the paginated `location-area` listing and a single area's details.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of the `location-area` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    /// Fully-qualified URL of the next page, absent on the last page
    pub next: Option<String>,
    /// Fully-qualified URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// Details of a single location area (`location-area/{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaDetails {
    #[serde(default)]
    pub name: String,
    /// Pokemon that can be encountered in the area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetails {
    /// Names of the encounterable pokemon, in API order
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
