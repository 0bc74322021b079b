//! Operation-level errors

use pokedex_schema::{ApiError, ParseError, PokemonRef};
use thiserror::Error;

use crate::types::Type;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DexError {
    #[error("Failed to load generation {generation}: {source}")]
    Generation { generation: u32, source: ApiError },

    #[error("Failed to load pokemon list (limit {limit}, offset {offset}): {source}")]
    Page {
        limit: u32,
        offset: u32,
        source: ApiError,
    },

    #[error("Failed to load pokemon {pokemon}: {source}")]
    Pokemon { pokemon: PokemonRef, source: ApiError },

    #[error("Failed to load type data for {type_name}: {source}")]
    TypeData { type_name: Type, source: ApiError },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Select at least one attacking and one defending type")]
    IncompleteSelection,

    #[error("Not enough pokemon for a round: need {needed}, have {available}")]
    RosterTooSmall { needed: usize, available: usize },

    #[error("Malformed data: {0}")]
    Malformed(#[from] ParseError),
}

/// Coarse classification for user-facing messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    NotFound,
    UpstreamServer,
    MalformedData,
    InvalidInput,
}

impl DexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generation { source, .. }
            | Self::Page { source, .. }
            | Self::Pokemon { source, .. }
            | Self::TypeData { source, .. } => match source {
                ApiError::Network(_) => ErrorKind::Network,
                ApiError::NotFound(_) => ErrorKind::NotFound,
                ApiError::UpstreamServer(_) | ApiError::UnexpectedStatus(_) => {
                    ErrorKind::UpstreamServer
                }
                ApiError::MalformedData(_) => ErrorKind::MalformedData,
            },
            Self::UnknownType(_) => ErrorKind::NotFound,
            Self::IncompleteSelection | Self::RosterTooSmall { .. } => ErrorKind::InvalidInput,
            Self::Malformed(_) => ErrorKind::MalformedData,
        }
    }

    /// Message suitable for showing next to a retry affordance
    pub fn user_message(&self) -> String {
        match (self.kind(), self) {
            (ErrorKind::Network, _) => {
                "Could not connect to the server. Check your internet connection.".to_string()
            }
            (ErrorKind::NotFound, Self::Generation { generation, .. }) => {
                format!("Generation {} was not found", generation)
            }
            (ErrorKind::NotFound, Self::Pokemon { pokemon, .. }) => {
                format!("Pokemon {} was not found", pokemon)
            }
            (ErrorKind::NotFound, Self::TypeData { type_name, .. }) => {
                format!("Type {} was not found", type_name)
            }
            (ErrorKind::NotFound, Self::UnknownType(name)) => {
                format!("Type {:?} does not exist", name)
            }
            (ErrorKind::NotFound, _) => "The requested data was not found".to_string(),
            (ErrorKind::UpstreamServer, _) => {
                "The PokeAPI server returned an error. Try again later.".to_string()
            }
            (ErrorKind::MalformedData, _) => {
                "Received unexpected data from the server.".to_string()
            }
            (ErrorKind::InvalidInput, _) => self.to_string(),
        }
    }
}
