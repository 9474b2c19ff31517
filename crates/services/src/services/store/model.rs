use crate::services::follow::{FollowTracker, Profile};

/// Draft and confirmed search terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub draft: String,
    pub confirmed: String,
}

impl SearchQuery {
    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft. Returns the new confirmed term when it changed.
    ///
    /// An empty draft never overwrites the confirmed term.
    pub fn submit(&mut self) -> Option<&str> {
        if self.draft.is_empty() || self.draft == self.confirmed {
            return None;
        }
        self.confirmed.clone_from(&self.draft);
        Some(&self.confirmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Fixed "My Profile" section.
    Viewer,
    /// Profile for the confirmed search term.
    Search,
}

/// Identifies one profile fetch so late responses can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub follow: FollowTracker,
}

impl LoadedProfile {
    pub fn new(profile: Profile) -> Self {
        let follow = FollowTracker::new(&profile);
        Self { profile, follow }
    }

    pub fn viewer_is_following(&self) -> bool {
        self.follow.displayed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Loading,
    /// Message is kept for logs; the view shows a generic text.
    Error(String),
    Loaded(LoadedProfile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSlot {
    pub username: String,
    pub can_follow: bool,
    pub request: RequestId,
    pub state: QueryState,
}

impl ProfileSlot {
    pub fn loading(username: impl Into<String>, can_follow: bool, request: RequestId) -> Self {
        Self {
            username: username.into(),
            can_follow,
            request,
            state: QueryState::Loading,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedProfile> {
        match &self.state {
            QueryState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }
}

/// Everything the page renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub search: SearchQuery,
    pub viewer: ProfileSlot,
    /// `None` while the confirmed term is empty.
    pub searched: Option<ProfileSlot>,
}

impl ViewModel {
    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut ProfileSlot> {
        match id {
            SlotId::Viewer => Some(&mut self.viewer),
            SlotId::Search => self.searched.as_mut(),
        }
    }

    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut ProfileSlot> {
        std::iter::once(&mut self.viewer).chain(self.searched.as_mut())
    }
}
