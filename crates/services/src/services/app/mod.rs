//! Event loop that connects the store to the remote API.

pub mod api;
pub mod runtime;

pub use api::ProfileApi;
pub use runtime::FollowApp;
