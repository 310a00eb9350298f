//! Client configuration.
//!
//! Credentials resolve from explicit values first and from the environment
//! second. Empty environment values count as unset.

use std::fmt;

use crate::error::{Error, Result};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.the-board.jp/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BOARD_API_KEY";

/// Environment variable holding the API token.
pub const API_TOKEN_ENV: &str = "BOARD_API_TOKEN";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BOARD_BASE_URL";

/// Credentials and endpoint for one client instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_token: String,
    pub base_url: String,
}

impl Config {
    /// Configuration against the production API.
    pub fn new(api_key: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `BOARD_API_KEY`, `BOARD_API_TOKEN` and optionally `BOARD_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key =
            get(API_KEY_ENV).ok_or_else(|| Error::Config(format!("{} is not set", API_KEY_ENV)))?;
        let api_token = get(API_TOKEN_ENV)
            .ok_or_else(|| Error::Config(format!("{} is not set", API_TOKEN_ENV)))?;

        let mut config = Config::new(api_key, api_token);
        if let Some(base_url) = get(BASE_URL_ENV) {
            tracing::debug!(base_url = %base_url, "using base URL from {}", BASE_URL_ENV);
            config.base_url = base_url;
        }
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
