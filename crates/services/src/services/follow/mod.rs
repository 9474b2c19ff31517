//! Follow-state reconciliation.
//!
//! Holds the domain types shared by the executor and the store, plus the
//! per-entity tracker that applies optimistic follow/unfollow guesses and
//! reconciles them against server responses.

pub mod reconciler;
pub mod types;

pub use reconciler::{FollowTracker, IgnoreReason, MutationRequest, Resolution};
pub use types::*;
