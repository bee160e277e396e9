//! Runtime configuration
//!
//! A `Config` is built once per invocation (from the environment or a
//! builder) and passed by reference to the clients that need it.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::types::{DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};
use std::time::Duration;
use url::Url;

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GraphQL endpoint
pub const ENDPOINT_ENV: &str = "GITHUB_GRAPHQL_URL";

/// Configuration shared by every fetch in one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Credential attached to every request
    pub auth: AuthConfig,
    /// Records requested per page
    pub page_size: u32,
    /// Optional safety cap on pages fetched per collection
    pub max_pages: Option<u32>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth: AuthConfig::None,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("projectctl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config(format!("{TOKEN_ENV} environment variable not set")))?;

        let mut builder = Config::builder().token(token);
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|e| !e.is_empty()) {
            builder = builder.endpoint(endpoint);
        }
        builder.build()
    }

    /// Reopen this config for further overrides
    pub fn into_builder(self) -> ConfigBuilder {
        ConfigBuilder { config: self }
    }
}

/// Builder for `Config`
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the GraphQL endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the bearer token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.auth = AuthConfig::bearer(token);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Cap the number of pages fetched per collection
    #[must_use]
    pub fn max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<Config> {
        let config = self.config;

        Url::parse(&config.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", e.to_string()))?;

        if config.page_size == 0 || config.page_size > 100 {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and 100, got {}", config.page_size),
            ));
        }

        if config.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://api.github.com/graphql");
        assert_eq!(config.page_size, 10);
        assert!(config.max_pages.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("projectctl/"));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .endpoint("https://github.example.com/api/graphql")
            .token("abc")
            .page_size(50)
            .max_pages(Some(20))
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent/1.0")
            .build()
            .unwrap();

        assert_eq!(config.endpoint, "https://github.example.com/api/graphql");
        assert_eq!(config.auth, AuthConfig::bearer("abc"));
        assert_eq!(config.page_size, 50);
        assert_eq!(config.max_pages, Some(20));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_config_builder_rejects_bad_values() {
        assert!(Config::builder().endpoint("not a url").build().is_err());
        assert!(Config::builder().page_size(0).build().is_err());
        assert!(Config::builder().page_size(101).build().is_err());
        assert!(Config::builder().max_pages(Some(0)).build().is_err());
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: GITHUB_TOKEN environment variable not set"
        );

        let err = Config::from_lookup(lookup(&[("GITHUB_TOKEN", "")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_lookup_with_endpoint_override() {
        let config = Config::from_lookup(lookup(&[
            ("GITHUB_TOKEN", "ghp_x"),
            ("GITHUB_GRAPHQL_URL", "http://127.0.0.1:9999/graphql"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:9999/graphql");
        assert!(config.auth.is_authenticated());
    }

    #[test]
    fn test_into_builder_revalidates_overrides() {
        let config = Config::from_lookup(lookup(&[("GITHUB_TOKEN", "ghp_x")])).unwrap();

        let tuned = config.clone().into_builder().page_size(25).build().unwrap();
        assert_eq!(tuned.page_size, 25);
        assert_eq!(tuned.auth, config.auth);

        assert!(config.into_builder().page_size(500).build().is_err());
    }
}
