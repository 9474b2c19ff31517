//! GraphQL executor for the remote profile API.
//!
//! Thin JSON-over-HTTP transport: posts an operation with its variables and
//! unwraps the `{data, errors}` envelope. No parsing, no normalized cache.

pub mod client;
pub mod error;
pub mod operations;
pub mod service;
pub mod types;


pub use client::GraphQLClient;
pub use error::ApiError;
pub use service::ProfileService;
pub use types::*;
