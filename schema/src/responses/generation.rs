use serde::{Deserialize, Serialize};

use crate::NamedResource;

/// `GET /generation/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub id: u32,
    pub name: String,

    /// Region introduced by this generation
    #[serde(default)]
    pub main_region: Option<NamedResource>,

    /// Species introduced by this generation, in no guaranteed order
    pub pokemon_species: Vec<NamedResource>,
}

/// `GET /pokemon?limit&offset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    /// Total number of pokemon available upstream
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl PokemonListResponse {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
