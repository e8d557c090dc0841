//! Host server settings, read from `SUPPLIER_*` environment variables.
//!
//! | Variable                | Default                                           |
//! |-------------------------|---------------------------------------------------|
//! | `SUPPLIER_HOST`         | `127.0.0.1`                                       |
//! | `SUPPLIER_PORT`         | `8080`                                            |
//! | `SUPPLIER_API_URL`      | `https://supplier-back.azurewebsites.net/ajouter/api` |
//! | `SUPPLIER_OPEN_BROWSER` | `true` (`0`, `false`, `no` disable it)            |

use common::requests::{ClientConfig, DEFAULT_API_BASE_URL};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("SUPPLIER_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("SUPPLIER_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
    #[error("SUPPLIER_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = value("SUPPLIER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match value("SUPPLIER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let api_base_url = match value("SUPPLIER_API_URL") {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                raw.trim_end_matches('/').to_string()
            }
            Some(raw) => return Err(ConfigError::InvalidApiUrl(raw)),
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let open_browser = match value("SUPPLIER_OPEN_BROWSER") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(raw)),
            },
            None => true,
        };

        Ok(Self {
            host,
            port,
            api_base_url,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The part of the settings handed to the browser application.
    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.clone(),
        }
    }
}
