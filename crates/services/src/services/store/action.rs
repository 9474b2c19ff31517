use crate::services::{
    follow::{FollowStatus, MutationRequest, MutationTicket, Profile, UserId},
    graphql::ApiError,
};

use super::model::{RequestId, SlotId};

/// Inputs to the store: user events and completed requests.
#[derive(Debug)]
pub enum Action {
    /// Fetch the fixed viewer profile.
    Start,
    EditDraft(String),
    SubmitSearch,
    /// Toggle follow on the searched profile.
    ToggleFollow,
    ProfileFetched {
        slot: SlotId,
        request: RequestId,
        result: Result<Profile, ApiError>,
    },
    FollowResolved {
        user_id: UserId,
        ticket: MutationTicket,
        result: Result<FollowStatus, ApiError>,
    },
}

/// Work the runtime must start after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProfile {
        slot: SlotId,
        request: RequestId,
        username: String,
    },
    SendMutation(MutationRequest),
}
