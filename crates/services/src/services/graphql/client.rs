use std::{fmt::Debug, time::Duration};

use reqwest::header::USER_AGENT;
use serde::{Serialize, de::DeserializeOwned};

use super::{
    error::ApiError,
    operations::{FOLLOW_USER, Operation, UNFOLLOW_USER, USER_BY_LOGIN},
    types::{
        FollowUserData, GraphQLRequest, GraphQLResponse, UnfollowUserData, UserByLoginData,
        UserIdVariables, UsernameVariables,
    },
};
use crate::services::follow::{FollowStatus, Profile, UserId};

pub struct GraphQLClient {
    endpoint: String,
    token: Option<String>,
    user_agent: String,
    client: reqwest::Client,
}

impl GraphQLClient {
    pub fn new(
        endpoint: String,
        token: Option<String>,
        user_agent: String,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            token,
            user_agent,
            client,
        })
    }

    /// Post one operation and unwrap its `data`.
    ///
    /// A non-empty `errors` array fails the whole call, even when partial
    /// data came back with it.
    pub async fn execute<V, T>(&self, operation: Operation, variables: V) -> Result<T, ApiError>
    where
        V: Serialize + Debug,
        T: DeserializeOwned,
    {
        let body = GraphQLRequest {
            query: operation.document,
            operation_name: operation.name,
            variables,
        };

        tracing::info!(
            "Sending GraphQL {} to: {} with variables: {:?}",
            operation.name,
            self.endpoint,
            body.variables
        );

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(USER_AGENT, &self.user_agent)
            .json(&body);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
            tracing::debug!("Using bearer token for authentication");
        }

        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("Failed to reach GraphQL endpoint: {}", e);
                return Err(e.into());
            }
        };

        let status = response.status();
        tracing::info!("GraphQL {} response status: {}", operation.name, status);
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("GraphQL endpoint error response: {}", body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQLResponse<T> = response.json().await?;

        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope
                .errors
                .into_iter()
                .map(|error| match error.kind {
                    Some(kind) => format!("{kind}: {}", error.message),
                    None => error.message,
                })
                .collect();
            tracing::warn!("GraphQL {} returned errors: {:?}", operation.name, messages);
            return Err(ApiError::GraphQL(messages));
        }

        envelope.data.ok_or(ApiError::MissingData(operation.name))
    }

    pub async fn user_by_login(&self, username: &str) -> Result<Profile, ApiError> {
        let data: UserByLoginData = self
            .execute(
                USER_BY_LOGIN,
                UsernameVariables {
                    username: username.to_string(),
                },
            )
            .await?;

        data.user
            .map(Profile::from)
            .ok_or_else(|| ApiError::UserNotFound(username.to_string()))
    }

    pub async fn follow_user(&self, user_id: &UserId) -> Result<FollowStatus, ApiError> {
        let data: FollowUserData = self
            .execute(
                FOLLOW_USER,
                UserIdVariables {
                    user_id: user_id.clone(),
                },
            )
            .await?;

        data.follow_user
            .and_then(|payload| payload.user)
            .map(FollowStatus::from)
            .ok_or(ApiError::MissingData(FOLLOW_USER.name))
    }

    pub async fn unfollow_user(&self, user_id: &UserId) -> Result<FollowStatus, ApiError> {
        let data: UnfollowUserData = self
            .execute(
                UNFOLLOW_USER,
                UserIdVariables {
                    user_id: user_id.clone(),
                },
            )
            .await?;

        data.unfollow_user
            .and_then(|payload| payload.user)
            .map(FollowStatus::from)
            .ok_or(ApiError::MissingData(UNFOLLOW_USER.name))
    }
}
