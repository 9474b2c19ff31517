use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Opaque node id assigned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user profile as returned by the profile query.
///
/// `viewer_is_following` is the value at fetch time. The value to display
/// lives in the slot's [`FollowTracker`](super::FollowTracker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub url: String,
    pub bio: String,
    pub viewer_is_following: bool,
}

/// Authoritative follow state returned by a follow or unfollow mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowStatus {
    pub user_id: UserId,
    pub viewer_is_following: bool,
}

/// Which mutation a toggle click issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum FollowIntent {
    Follow,
    Unfollow,
}

impl FollowIntent {
    pub fn from_following(viewer_is_following: bool) -> Self {
        if viewer_is_following {
            FollowIntent::Unfollow
        } else {
            FollowIntent::Follow
        }
    }

    /// Value shown while the mutation is in flight.
    pub fn optimistic_value(self) -> bool {
        matches!(self, FollowIntent::Follow)
    }
}

/// Reconciliation phase of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FollowPhase {
    #[default]
    Idle,
    OptimisticFollowing,
    OptimisticUnfollowing,
    Settled,
}

impl FollowPhase {
    pub fn optimistic(intent: FollowIntent) -> Self {
        match intent {
            FollowIntent::Follow => FollowPhase::OptimisticFollowing,
            FollowIntent::Unfollow => FollowPhase::OptimisticUnfollowing,
        }
    }
}

/// Identifies one toggle click. Issued in increasing order by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MutationTicket(pub u64);

impl fmt::Display for MutationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
