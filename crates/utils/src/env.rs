//! Environment variable helpers with logged fallbacks.

use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Read a variable, treating unset and empty the same way.
pub fn optional_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

pub fn env_or_default(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

pub fn parse_env<T>(key: &str, default: T) -> Result<T, EnvError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = optional_env(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        EnvError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}
