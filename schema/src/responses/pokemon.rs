use serde::{Deserialize, Serialize};

use crate::NamedResource;

/// `GET /pokemon/{id|name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    pub sprites: Sprites,

    #[serde(default)]
    pub stats: Vec<StatValue>,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    pub types: Vec<TypeSlot>,
}

impl PokemonDetail {
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.iter().map(|t| t.type_.name.as_str()).collect()
    }

    /// Base stat by API name (`"hp"`, `"special-attack"`, ...)
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}
