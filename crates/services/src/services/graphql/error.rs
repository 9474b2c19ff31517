use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("GraphQL endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQL(Vec<String>),
    #[error("Response to {0} carried no data")]
    MissingData(&'static str),
    #[error("User '{0}' not found")]
    UserNotFound(String),
}
