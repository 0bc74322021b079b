use thiserror::Error;

pub mod media;
pub mod resource;
pub mod responses;

pub use resource::{NamedResource, PokemonRef, resource_id};
pub use responses::{
    AbilitySlot, DamageRelations, GenerationResponse, PokemonDetail, PokemonListResponse,
    Sprites, StatValue, TypeResponse, TypeSlot, decode,
};

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid resource url: {0}")]
    InvalidResourceUrl(String),

    #[error("Non-numeric id segment {segment:?} in {url}")]
    NonNumericId { url: String, segment: String },

    #[error("Unknown type: {0}")]
    UnknownType(String),
}

/// Failure of a single request against the API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No connectivity, DNS failure or timeout
    #[error("Could not reach the server: {0}")]
    Network(String),

    /// HTTP 404 for the requested path
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 5xx
    #[error("Upstream server error (HTTP {0})")]
    UpstreamServer(u16),

    /// Any other non-success status
    #[error("Unexpected response status (HTTP {0})")]
    UnexpectedStatus(u16),

    /// Body did not match the expected schema
    #[error("Malformed response: {0}")]
    MalformedData(String),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::MalformedData(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedData(err.to_string())
    }
}
