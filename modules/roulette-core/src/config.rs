use std::env;

use thiserror::Error;

use crate::types::DEFAULT_MAX_SAMPLE_SIZE;

pub const ACCESS_TOKEN_ENV: &str = "YELP_ROULETTE_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    /// Pool bound applied to every SMS search.
    pub max_sample_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let access_token = get(ACCESS_TOKEN_ENV).ok_or(ConfigError::Missing(ACCESS_TOKEN_ENV))?;

        let web_port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => 3000,
        };

        let max_sample_size = match get("ROULETTE_MAX_SAMPLE_SIZE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "ROULETTE_MAX_SAMPLE_SIZE",
                expected: "a non-negative integer",
                value: raw,
            })?,
            None => DEFAULT_MAX_SAMPLE_SIZE,
        };

        Ok(Self {
            access_token,
            web_host: get("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            max_sample_size,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }

    /// Log the effective configuration with the token masked.
    pub fn log_redacted(&self) {
        tracing::info!(
            web_host = self.web_host.as_str(),
            web_port = self.web_port,
            max_sample_size = self.max_sample_size,
            access_token = if self.access_token.is_empty() { "(unset)" } else { "(set)" },
            "Loaded configuration"
        );
    }
}
