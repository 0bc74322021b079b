use serde::{Deserialize, Serialize};

use crate::NamedResource;

/// `GET /type/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResponse {
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// The six directional relation lists, exactly as the API names them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    pub double_damage_to: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
}
