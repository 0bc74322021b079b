//! Response bodies for the endpoints the Pokedex reads
//!
//! Only the fields the client consumes are modelled; serde ignores the rest.
//! Anything that does not match fails to decode, so a shape change upstream
//! surfaces as [`crate::ApiError::MalformedData`] instead of a silent default.

mod generation;
mod pokemon;
mod type_data;

pub use generation::{GenerationResponse, PokemonListResponse};
pub use pokemon::{AbilitySlot, PokemonDetail, Sprites, StatValue, TypeSlot};
pub use type_data::{DamageRelations, TypeResponse};

use serde::de::DeserializeOwned;

/// Decode a response body into one of the schemas above
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, crate::ApiError> {
    serde_json::from_str(body).map_err(Into::into)
}
