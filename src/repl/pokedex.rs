//! Registry of caught pokemon.

use std::collections::BTreeMap;

use crate::models::Pokemon;

/// Caught pokemon keyed by name; catching the same name again replaces it.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of every caught pokemon, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
