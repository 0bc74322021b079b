//! Generation rosters
//!
//! The API returns species in no particular order. A [`Roster`] parses each
//! entry's id out of its resource url once, then keeps entries sorted by id.

use std::fmt;

use pokedex_schema::{NamedResource, ParseError, PokemonDetail, PokemonRef, media};

use crate::error::DexError;
use crate::source::SpeciesSource;

/// Page size of the national index when no generation is selected
pub const DEFAULT_PAGE_LIMIT: u32 = 151;

/// A species reference with its id already parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub url: String,
}

impl RosterEntry {
    pub fn from_resource(resource: NamedResource) -> Result<Self, ParseError> {
        let id = resource.id()?;
        Ok(Self {
            id,
            name: resource.name,
            url: resource.url,
        })
    }

    /// Zero-padded dex number, e.g. `#025`
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Name with its first letter capitalized
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn artwork_url(&self) -> String {
        media::artwork_url(self.id)
    }

    pub fn cry_url(&self) -> String {
        media::cry_url(self.id)
    }

    /// Reference for the detail request of this entry
    pub fn pokemon_ref(&self) -> PokemonRef {
        PokemonRef::Id(self.id)
    }

    fn matches(&self, lowered_query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query)
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_number(), self.display_name())
    }
}

/// Species sorted ascending by id, without duplicate ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Parse ids and impose ordering. A single unparseable url fails the lot.
    pub fn from_resources<I>(resources: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = NamedResource>,
    {
        let mut entries = resources
            .into_iter()
            .map(RosterEntry::from_resource)
            .collect::<Result<Vec<_>, _>>()?;

        entries.sort_by_key(|e| e.id);
        entries.dedup_by_key(|e| e.id);

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&RosterEntry> {
        self.entries.first()
    }

    pub fn get_by_id(&self, id: u32) -> Option<&RosterEntry> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RosterEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive substring match on the name, keeping roster order
    ///
    /// A blank query returns every entry.
    pub fn filter(&self, query: &str) -> Vec<&RosterEntry> {
        if query.trim().is_empty() {
            return self.entries.iter().collect();
        }

        let lowered = query.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&lowered)).collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Loads rosters and details from a [`SpeciesSource`]
pub struct RosterLoader<S> {
    source: S,
}

impl<S: SpeciesSource> RosterLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Species of one generation, sorted by id
    pub async fn load_generation(&self, generation: u32) -> Result<Roster, DexError> {
        let response = self
            .source
            .generation(generation)
            .await
            .map_err(|source| DexError::Generation { generation, source })?;

        let roster = Roster::from_resources(response.pokemon_species)?;
        tracing::debug!(generation, count = roster.len(), "Loaded generation roster");

        Ok(roster)
    }

    /// One page of the national index, sorted by id
    pub async fn load_page(&self, limit: u32, offset: u32) -> Result<Roster, DexError> {
        let response = self
            .source
            .pokemon_page(limit, offset)
            .await
            .map_err(|source| DexError::Page {
                limit,
                offset,
                source,
            })?;

        let roster = Roster::from_resources(response.results)?;
        tracing::debug!(limit, offset, count = roster.len(), "Loaded pokemon page");

        Ok(roster)
    }

    /// Full detail of one roster entry
    pub async fn load_details(&self, entry: &RosterEntry) -> Result<PokemonDetail, DexError> {
        let pokemon = entry.pokemon_ref();
        self.source
            .pokemon(&pokemon)
            .await
            .map_err(|source| DexError::Pokemon { pokemon, source })
    }
}
