//! Pokemon model
//!
//! Only the fields the REPL shows or rolls against are decoded.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A single pokemon (`pokemon/{name}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Experience gained for defeating it; PokeAPI reports `null` for some forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
