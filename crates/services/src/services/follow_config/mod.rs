//! Runtime configuration for the profile service.

pub mod types;

use profile_follow_utils::env::{EnvError, env_or_default, optional_env, parse_env};
use thiserror::Error;
pub use types::*;

pub const ENDPOINT_VAR: &str = "PROFILE_FOLLOW_ENDPOINT";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const VIEWER_VAR: &str = "PROFILE_FOLLOW_VIEWER";
pub const TIMEOUT_VAR: &str = "PROFILE_FOLLOW_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("Endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}

impl FollowConfig {
    /// Build the config from the process environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = FollowConfig::default();

        let config = FollowConfig {
            endpoint: env_or_default(ENDPOINT_VAR, &defaults.endpoint),
            token: optional_env(TOKEN_VAR),
            viewer_login: env_or_default(VIEWER_VAR, &defaults.viewer_login),
            user_agent: defaults.user_agent,
            request_timeout_secs: parse_env(TIMEOUT_VAR, defaults.request_timeout_secs)?,
        };

        if config.token.is_none() {
            tracing::warn!("{TOKEN_VAR} not set; the API will likely reject requests");
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(self.endpoint.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
