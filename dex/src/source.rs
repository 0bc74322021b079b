//! Where type and species data comes from
//!
//! The calculator and roster loader are generic over these traits. The HTTP
//! client implements both; [`TypeChart`] answers type queries offline.

use std::future::Future;

use pokedex_schema::{
    ApiError, DamageRelations, GenerationResponse, NamedResource, POKEAPI_URL, PokemonDetail,
    PokemonListResponse, PokemonRef, TypeResponse,
};

use crate::types::{Type, TypeRelations};

/// Source of `GET /type/{name}` data
pub trait TypeDataSource {
    fn type_data(&self, type_name: Type)
    -> impl Future<Output = Result<TypeResponse, ApiError>> + Send;
}

/// Source of generation, list and detail data
pub trait SpeciesSource {
    fn generation(
        &self,
        id: u32,
    ) -> impl Future<Output = Result<GenerationResponse, ApiError>> + Send;

    fn pokemon_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<PokemonListResponse, ApiError>> + Send;

    fn pokemon(
        &self,
        pokemon: &PokemonRef,
    ) -> impl Future<Output = Result<PokemonDetail, ApiError>> + Send;
}

impl<S: TypeDataSource + Sync> TypeDataSource for &S {
    fn type_data(
        &self,
        type_name: Type,
    ) -> impl Future<Output = Result<TypeResponse, ApiError>> + Send {
        (**self).type_data(type_name)
    }
}

impl<S: SpeciesSource + Sync> SpeciesSource for &S {
    fn generation(
        &self,
        id: u32,
    ) -> impl Future<Output = Result<GenerationResponse, ApiError>> + Send {
        (**self).generation(id)
    }

    fn pokemon_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<PokemonListResponse, ApiError>> + Send {
        (**self).pokemon_page(limit, offset)
    }

    fn pokemon(
        &self,
        pokemon: &PokemonRef,
    ) -> impl Future<Output = Result<PokemonDetail, ApiError>> + Send {
        (**self).pokemon(pokemon)
    }
}

/// Offline type data built from [`crate::TYPE_CHART`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeChart;

impl TypeChart {
    pub fn relations(&self, t: Type) -> TypeRelations {
        TypeRelations::from_chart(t)
    }

    /// The chart's relations for `t`, shaped like the API response
    pub fn response(&self, t: Type) -> TypeResponse {
        let relations = self.relations(t);
        let to_wire = |set: &std::collections::BTreeSet<Type>| -> Vec<NamedResource> {
            set.iter().map(|other| type_resource(*other)).collect()
        };

        TypeResponse {
            id: t.api_id(),
            name: t.api_name().to_string(),
            damage_relations: DamageRelations {
                double_damage_to: to_wire(&relations.double_damage_to),
                half_damage_to: to_wire(&relations.half_damage_to),
                no_damage_to: to_wire(&relations.no_damage_to),
                double_damage_from: to_wire(&relations.double_damage_from),
                half_damage_from: to_wire(&relations.half_damage_from),
                no_damage_from: to_wire(&relations.no_damage_from),
            },
        }
    }
}

impl TypeDataSource for TypeChart {
    async fn type_data(&self, type_name: Type) -> Result<TypeResponse, ApiError> {
        Ok(self.response(type_name))
    }
}

fn type_resource(t: Type) -> NamedResource {
    NamedResource::new(
        t.api_name(),
        format!("{}/type/{}/", POKEAPI_URL, t.api_id()),
    )
}
