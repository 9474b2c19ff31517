use serde::{Deserialize, Serialize};

use crate::services::follow::{FollowStatus, Profile, UserId};

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest<V> {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: V,
}

/// Response envelope; `data` and `errors` may both be present
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLErrorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsernameVariables {
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserIdVariables {
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserByLoginData {
    pub user: Option<UserNode>,
}

/// User fields selected by the profile query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub id: UserId,
    pub name: Option<String>,
    pub url: String,
    pub bio: Option<String>,
    pub viewer_is_following: bool,
}

impl From<UserNode> for Profile {
    fn from(node: UserNode) -> Self {
        Self {
            id: node.id,
            name: node.name.unwrap_or_default(),
            url: node.url,
            bio: node.bio.unwrap_or_default(),
            viewer_is_following: node.viewer_is_following,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUserData {
    pub follow_user: Option<FollowPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnfollowUserData {
    pub unfollow_user: Option<FollowPayload>,
}

/// Payload shared by both follow mutations
#[derive(Debug, Clone, Deserialize)]
pub struct FollowPayload {
    pub user: Option<FollowedUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedUser {
    pub id: UserId,
    pub viewer_is_following: bool,
}

impl From<FollowedUser> for FollowStatus {
    fn from(user: FollowedUser) -> Self {
        Self {
            user_id: user.id,
            viewer_is_following: user.viewer_is_following,
        }
    }
}
