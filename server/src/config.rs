//! Environment configuration.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `API_URL` | unset | Upstream base URL. Not required at startup; calls fail at request time without it. |
//! | `HOST` | `0.0.0.0` | Bind address. |
//! | `PORT` | `3000` | Bind port. |
//! | `UPSTREAM_TIMEOUT_MS` | unset | Per-request upstream timeout. Unset means no timeout. |

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("UPSTREAM_TIMEOUT_MS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let upstream_timeout = match var("UPSTREAM_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Self {
            api_url: var("API_URL"),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            upstream_timeout,
        })
    }

    /// Upstream base URL, empty when `API_URL` is unset.
    pub fn upstream_base(&self) -> &str {
        self.api_url.as_deref().unwrap_or("")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
