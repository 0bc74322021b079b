use std::time::Duration;

use pokedex_schema::POKEAPI_URL;

/// HTTP settings for [`crate::PokeApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub base_url: String,
    /// Budget for a whole request, connect through body
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("pokedex-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("pokedex-client/"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
