//! Async PokeAPI client and the screen sessions built on it
//!
//! ```text
//! RosterSession / CalculatorSession / GuessSession
//!        │ RequestToken per fetch, stale results dropped
//!        ▼
//! RosterLoader / TypeEffectivenessCalculator   (pokedex-dex)
//!        │ SpeciesSource / TypeDataSource
//!        ▼
//! PokeApiClient ── reqwest ──▶ GET {base_url}/...
//! ```

mod config;
mod error;
pub mod sequence;
pub mod session;

use anyhow::{Context, Result};
use pokedex_dex::{SpeciesSource, Type, TypeDataSource};
use pokedex_schema::{
    ApiError, GenerationResponse, PokemonDetail, PokemonListResponse, PokemonRef, TypeResponse,
    decode,
};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

pub use config::ClientConfig;
pub use sequence::{RequestSequencer, RequestToken};
pub use session::{CalculatorSession, GuessSession, LoadOutcome, RosterSession, Slot};

pub use pokedex_dex as dex;
pub use pokedex_schema::POKEAPI_URL;

/// Read-only PokeAPI client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Client for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /generation/{id}`
    pub async fn fetch_generation(&self, id: u32) -> Result<GenerationResponse, ApiError> {
        self.get_json(&format!("/generation/{}", id)).await
    }

    /// `GET /pokemon?limit&offset`
    pub async fn fetch_pokemon_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<PokemonListResponse, ApiError> {
        let path = "/pokemon";
        let request = self
            .http
            .get(self.url(path))
            .query(&[("limit", limit), ("offset", offset)]);
        self.send(request, path).await
    }

    /// `GET /pokemon/{id|name}`
    pub async fn fetch_pokemon(&self, pokemon: &PokemonRef) -> Result<PokemonDetail, ApiError> {
        self.get_json(&format!("/pokemon/{}", pokemon.to_path_segment()))
            .await
    }

    /// `GET /type/{name}` for any name, including ones this crate does not model
    pub async fn fetch_type(&self, name: &str) -> Result<TypeResponse, ApiError> {
        self.get_json(&format!("/type/{}", name.trim().to_lowercase()))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path));
        self.send(request, path).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Request failed");
            error::from_transport(e)
        })?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "GET");

        if !status.is_success() {
            let err = error::from_status(status, path);
            tracing::warn!(path, status = status.as_u16(), "Request rejected");
            return Err(err);
        }

        let body = response.text().await.map_err(error::from_transport)?;
        decode(&body).inspect_err(|e| {
            tracing::warn!(path, error = %e, "Response did not match schema");
        })
    }
}

impl TypeDataSource for PokeApiClient {
    async fn type_data(&self, type_name: Type) -> Result<TypeResponse, ApiError> {
        self.fetch_type(type_name.api_name()).await
    }
}

impl SpeciesSource for PokeApiClient {
    async fn generation(&self, id: u32) -> Result<GenerationResponse, ApiError> {
        self.fetch_generation(id).await
    }

    async fn pokemon_page(&self, limit: u32, offset: u32) -> Result<PokemonListResponse, ApiError> {
        self.fetch_pokemon_page(limit, offset).await
    }

    async fn pokemon(&self, pokemon: &PokemonRef) -> Result<PokemonDetail, ApiError> {
        self.fetch_pokemon(pokemon).await
    }
}
