//! Text views derived from the [`ViewModel`].
//!
//! Rendering is a pure function of the model; nothing here mutates state.

use std::fmt;

use crate::services::{
    follow::FollowIntent,
    store::{ProfileSlot, QueryState, ViewModel},
};

pub const LOADING_TEXT: &str = "Loading ...";
pub const ERROR_TEXT: &str = "Something went wrong ...";

/// The follow toggle; its label is the action a click would take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowButton {
    pub intent: FollowIntent,
}

impl fmt::Display for FollowButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.intent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileView {
    Loading,
    Error,
    Loaded {
        name: String,
        url: String,
        bio: String,
        button: Option<FollowButton>,
    },
}

impl ProfileView {
    pub fn from_slot(slot: &ProfileSlot) -> Self {
        match &slot.state {
            QueryState::Loading => ProfileView::Loading,
            QueryState::Error(_) => ProfileView::Error,
            QueryState::Loaded(loaded) => ProfileView::Loaded {
                name: loaded.profile.name.clone(),
                url: loaded.profile.url.clone(),
                bio: loaded.profile.bio.clone(),
                button: slot.can_follow.then(|| FollowButton {
                    intent: loaded.follow.intent(),
                }),
            },
        }
    }

    pub fn button(&self) -> Option<FollowButton> {
        match self {
            ProfileView::Loaded { button, .. } => *button,
            _ => None,
        }
    }
}

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileView::Loading => f.write_str(LOADING_TEXT),
            ProfileView::Error => f.write_str(ERROR_TEXT),
            ProfileView::Loaded {
                name,
                url,
                bio,
                button,
            } => {
                writeln!(f, "Username: {name} ({url})")?;
                write!(f, "Bio: {bio}")?;
                if let Some(button) = button {
                    write!(f, "\n{button}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub viewer: ProfileView,
    pub draft: String,
    /// Absent while the confirmed search term is empty.
    pub searched: Option<ProfileView>,
}

impl PageView {
    pub fn from_model(model: &ViewModel) -> Self {
        Self {
            viewer: ProfileView::from_slot(&model.viewer),
            draft: model.search.draft.clone(),
            searched: model
                .searched
                .as_ref()
                .filter(|_| !model.search.confirmed.is_empty())
                .map(ProfileView::from_slot),
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "My Profile:")?;
        writeln!(f, "{}", self.viewer)?;
        writeln!(f, "----")?;
        write!(f, "Search: {}", self.draft)?;
        if let Some(searched) = &self.searched {
            write!(f, "\n\n{searched}")?;
        }
        Ok(())
    }
}
