//! API client configuration
//!
//! Holds the base URL of the service plus the few HTTP client settings that
//! can be tuned from the command line.

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Base URL of the public Rick and Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Errors that can occur while building a client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed
    #[error("Invalid API base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// The base URL uses a scheme other than http or https
    #[error("Unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Settings for talking to the API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Validated base URL without trailing slash
    base_url: String,
    /// Overall request timeout, `None` keeps the client default
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// The URL must be absolute http(s). A trailing slash is removed so record
    /// paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: e,
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
