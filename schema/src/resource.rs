//! Named resource references and id extraction
//!
//! Every URL handed out by the API has the shape `.../resource/{id}/`, so the
//! numeric id is always the second-to-last `/`-delimited segment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A `{name, url}` pair pointing at another resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Parse the numeric id out of this resource's url
    pub fn id(&self) -> Result<u32, ParseError> {
        resource_id(&self.url)
    }
}

/// Extract the numeric id from a resource url
///
/// Takes the second-to-last `/` segment, so the trailing slash the API always
/// emits is required: `.../pokemon-species/25/` yields 25.
pub fn resource_id(url: &str) -> Result<u32, ParseError> {
    let mut segments = url.rsplit('/');
    let _last = segments.next();
    let segment = segments
        .next()
        .ok_or_else(|| ParseError::InvalidResourceUrl(url.to_string()))?;

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumericId {
            url: url.to_string(),
            segment: segment.to_string(),
        });
    }

    segment.parse().map_err(|_| ParseError::NonNumericId {
        url: url.to_string(),
        segment: segment.to_string(),
    })
}

/// How a single pokemon is addressed in `GET /pokemon/{id|name}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl PokemonRef {
    /// Path segment for the request; names are lowercased
    pub fn to_path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Name(name) => name.trim().to_lowercase(),
        }
    }
}

impl From<u32> for PokemonRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for PokemonRef {
    fn from(s: &str) -> Self {
        match s.trim().parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(s.to_string()),
        }
    }
}

impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_species() {
        let url = "https://pokeapi.co/api/v2/pokemon-species/25/";
        assert_eq!(resource_id(url), Ok(25));
    }

    #[test]
    fn test_resource_id_large() {
        let url = "https://pokeapi.co/api/v2/pokemon-species/1025/";
        assert_eq!(resource_id(url), Ok(1025));
    }

    #[test]
    fn test_resource_id_without_trailing_slash() {
        // Second-to-last segment is then the resource kind
        let url = "https://pokeapi.co/api/v2/pokemon-species/25";
        assert_eq!(
            resource_id(url),
            Err(ParseError::NonNumericId {
                url: url.to_string(),
                segment: "pokemon-species".to_string(),
            })
        );
    }

    #[test]
    fn test_resource_id_rejects_signs_and_garbage() {
        assert!(resource_id("https://pokeapi.co/api/v2/type/+3/").is_err());
        assert!(resource_id("https://pokeapi.co/api/v2/type/3a/").is_err());
        assert!(resource_id("https://pokeapi.co/api/v2/type//").is_err());
    }

    #[test]
    fn test_resource_id_no_segments() {
        assert_eq!(
            resource_id("bulbasaur"),
            Err(ParseError::InvalidResourceUrl("bulbasaur".to_string()))
        );
    }

    #[test]
    fn test_named_resource_id() {
        let resource = NamedResource::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(resource.id(), Ok(25));
    }

    #[test]
    fn test_pokemon_ref_path_segment() {
        assert_eq!(PokemonRef::Id(6).to_path_segment(), "6");
        assert_eq!(
            PokemonRef::Name(" Charizard ".into()).to_path_segment(),
            "charizard"
        );
        assert_eq!(PokemonRef::from("151"), PokemonRef::Id(151));
        assert_eq!(PokemonRef::from("Mew"), PokemonRef::Name("Mew".into()));
    }
}
