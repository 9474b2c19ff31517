use async_trait::async_trait;

use super::{client::GraphQLClient, error::ApiError};
use crate::services::{
    app::ProfileApi,
    follow::{FollowStatus, Profile, UserId},
    follow_config::FollowConfig,
};

/// Profile API backed by the configured GraphQL endpoint.
pub struct ProfileService {
    config: FollowConfig,
    pub client: GraphQLClient,
}

impl ProfileService {
    pub fn new(config: FollowConfig) -> Result<Self, ApiError> {
        let client = GraphQLClient::new(
            config.endpoint.clone(),
            config.token.clone(),
            config.user_agent.clone(),
            config.request_timeout(),
        )?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }
}

#[async_trait]
impl ProfileApi for ProfileService {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError> {
        self.client.user_by_login(username).await
    }

    async fn follow_user(&self, user_id: &UserId) -> Result<FollowStatus, ApiError> {
        self.client.follow_user(user_id).await
    }

    async fn unfollow_user(&self, user_id: &UserId) -> Result<FollowStatus, ApiError> {
        self.client.unfollow_user(user_id).await
    }
}
