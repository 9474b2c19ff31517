use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_VIEWER_LOGIN: &str = "rwieruch";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the profile service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Bearer token sent with every request
    pub token: Option<String>,
    /// Login shown in the "My Profile" section
    pub viewer_login: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl FollowConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            viewer_login: DEFAULT_VIEWER_LOGIN.to_string(),
            user_agent: concat!("profile-follow/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for FollowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FollowConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("viewer_login", &self.viewer_login)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
