//! Type effectiveness, generation rosters and game logic for a Pokedex client.
//!
//! # Overview
//!
//! `pokedex-dex` sits between `pokedex-schema` (wire format) and the network
//! client:
//!
//! ```text
//! pokedex-schema (wire format)
//!        │
//!        ▼
//! pokedex-dex (domain types + calculations) ← THIS CRATE
//!        │
//!        └─> pokedex-client (HTTP + screen sessions)
//! ```
//!
//! Nothing in here talks to the network directly. Data arrives through the
//! [`TypeDataSource`] and [`SpeciesSource`] traits, so the HTTP client, the
//! offline [`TypeChart`] and test fixtures are interchangeable.
//!
//! # Main Types
//!
//! - [`Type`], [`TypePair`] - the eighteen elemental types
//! - [`TypeRelations`] - damage relations of one type, parsed from the API
//! - [`Effectiveness`] - combined multiplier, one of 0, ¼, ½, 1, 2, 4
//! - [`TypeEffectivenessCalculator`] - attacker vs defender calculations
//! - [`Roster`], [`RosterLoader`] - generation rosters sorted by species id
//! - [`DefensiveProfile`] - weaknesses/resistances/immunities of a defender
//! - [`Region`] - static region and badge data
//! - [`GuessGame`] - the "who's that pokemon" mini-game
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_dex::{Type, TypeChart, TypeEffectivenessCalculator};
//!
//! let calculator = TypeEffectivenessCalculator::new(TypeChart);
//! let result = calculator
//!     .effectiveness(Type::Water, Type::Fire, Some(Type::Rock))
//!     .await?;
//! println!("{} ({})", result, result.description()); // ×4 (Extremely effective)
//! ```

pub mod calculator;
pub mod error;
pub mod query;
pub mod quiz;
pub mod region;
pub mod roster;
pub mod source;
pub mod types;

pub use calculator::{Matchup, TypeEffectivenessCalculator};
pub use error::{DexError, ErrorKind};
pub use query::DefensiveProfile;
pub use quiz::{Guess, GuessGame, Round};
pub use region::{GENERATIONS, Region};
pub use roster::{DEFAULT_PAGE_LIMIT, Roster, RosterEntry, RosterLoader};
pub use source::{SpeciesSource, TypeChart, TypeDataSource};
pub use types::{Effectiveness, Factor, TYPE_CHART, Type, TypePair, TypeRelations};

// Re-export commonly used schema types
pub use pokedex_schema::{ApiError, NamedResource, ParseError, PokemonDetail, PokemonRef};
