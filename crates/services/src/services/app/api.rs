use async_trait::async_trait;

use crate::services::{
    follow::{FollowIntent, FollowStatus, Profile, UserId},
    graphql::ApiError,
};

/// Query and mutation executors the app runtime talks to.
#[async_trait]
pub trait ProfileApi: Send + Sync + 'static {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, ApiError>;

    async fn follow_user(&self, user_id: &UserId) -> Result<FollowStatus, ApiError>;

    async fn unfollow_user(&self, user_id: &UserId) -> Result<FollowStatus, ApiError>;

    async fn apply_intent(
        &self,
        intent: FollowIntent,
        user_id: &UserId,
    ) -> Result<FollowStatus, ApiError> {
        match intent {
            FollowIntent::Follow => self.follow_user(user_id).await,
            FollowIntent::Unfollow => self.unfollow_user(user_id).await,
        }
    }
}
