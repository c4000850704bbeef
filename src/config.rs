// src/config.rs
use std::{env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::info;

pub const BACKEND_URL: &str = "NAVIGATOR_BACKEND_URL";
pub const PORT: &str = "NAVIGATOR_PORT";
pub const UPSTREAM_TIMEOUT_SECS: &str = "NAVIGATOR_UPSTREAM_TIMEOUT_SECS";
pub const STATIC_DIR: &str = "NAVIGATOR_STATIC_DIR";
pub const ADMIN_KEY: &str = "NAVIGATOR_ADMIN_KEY";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingConfiguration { key: &'static str },

    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base address of the computation backend, without a trailing slash.
    pub backend_url: String,
    pub upstream_timeout: Duration,
    pub static_dir: String,
    pub admin_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = get(BACKEND_URL)
            .ok_or(ConfigError::MissingConfiguration { key: BACKEND_URL })?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: BACKEND_URL,
                value: backend_url,
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let timeout_secs: u64 = parse_or(UPSTREAM_TIMEOUT_SECS, get(UPSTREAM_TIMEOUT_SECS), 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: UPSTREAM_TIMEOUT_SECS,
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Self {
            port: parse_or(PORT, get(PORT), 3000)?,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            upstream_timeout: Duration::from_secs(timeout_secs),
            static_dir: get(STATIC_DIR).unwrap_or_else(|| "public".to_string()),
            admin_key: get(ADMIN_KEY),
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
            value,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
