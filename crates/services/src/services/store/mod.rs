//! View-model store.
//!
//! Owns the page state, applies [`Action`]s through a synchronous transition
//! function and hands back the [`Effect`]s the runtime has to start.
//! Subscribers are notified through a `watch` channel after every change.

pub mod action;
pub mod model;


pub use action::{Action, Effect};
pub use model::*;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::services::follow::{
    FollowStatus, IgnoreReason, MutationTicket, Profile, Resolution, UserId,
};
use crate::services::graphql::ApiError;

pub struct Store {
    model: ViewModel,
    next_request: u64,
    next_ticket: u64,
    notifier: watch::Sender<ViewModel>,
}

impl Store {
    pub fn new(viewer_login: impl Into<String>) -> Self {
        let model = ViewModel {
            search: SearchQuery::default(),
            viewer: ProfileSlot::loading(viewer_login, false, RequestId(0)),
            searched: None,
        };
        let (notifier, _) = watch::channel(model.clone());

        Self {
            model,
            next_request: 1,
            next_ticket: 1,
            notifier,
        }
    }

    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    /// Receiver that observes every committed state.
    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.notifier.subscribe()
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let (changed, effects) = self.reduce(action);
        if changed {
            self.notifier.send_replace(self.model.clone());
        }
        effects
    }

    fn reduce(&mut self, action: Action) -> (bool, Vec<Effect>) {
        match action {
            Action::Start => {
                let viewer = &self.model.viewer;
                (
                    false,
                    vec![Effect::FetchProfile {
                        slot: SlotId::Viewer,
                        request: viewer.request,
                        username: viewer.username.clone(),
                    }],
                )
            }
            Action::EditDraft(text) => {
                if self.model.search.draft == text {
                    return (false, Vec::new());
                }
                self.model.search.edit(text);
                (true, Vec::new())
            }
            Action::SubmitSearch => self.submit_search(),
            Action::ToggleFollow => self.toggle_follow(),
            Action::ProfileFetched {
                slot,
                request,
                result,
            } => (self.profile_fetched(slot, request, result), Vec::new()),
            Action::FollowResolved {
                user_id,
                ticket,
                result,
            } => (self.follow_resolved(&user_id, ticket, result), Vec::new()),
        }
    }

    fn submit_search(&mut self) -> (bool, Vec<Effect>) {
        let Some(term) = self.model.search.submit().map(str::to_string) else {
            debug!(
                draft = %self.model.search.draft,
                "Search submit ignored: empty or unchanged"
            );
            return (false, Vec::new());
        };

        let request = self.allocate_request();
        debug!(%term, request = request.0, "Confirmed search term");
        self.model.searched = Some(ProfileSlot::loading(term.clone(), true, request));

        (
            true,
            vec![Effect::FetchProfile {
                slot: SlotId::Search,
                request,
                username: term,
            }],
        )
    }

    fn toggle_follow(&mut self) -> (bool, Vec<Effect>) {
        let ticket = MutationTicket(self.next_ticket);
        let Some(slot) = self.model.searched.as_mut() else {
            debug!("Toggle ignored: no searched profile");
            return (false, Vec::new());
        };
        if !slot.can_follow {
            return (false, Vec::new());
        }
        let QueryState::Loaded(loaded) = &mut slot.state else {
            debug!(username = %slot.username, "Toggle ignored: profile not loaded");
            return (false, Vec::new());
        };

        self.next_ticket += 1;
        let request = loaded.follow.begin(ticket);
        (true, vec![Effect::SendMutation(request)])
    }

    fn profile_fetched(
        &mut self,
        slot_id: SlotId,
        request: RequestId,
        result: Result<Profile, ApiError>,
    ) -> bool {
        let Some(slot) = self.model.slot_mut(slot_id) else {
            warn!(?slot_id, request = request.0, "Profile response for a removed slot");
            return false;
        };
        if slot.request != request {
            warn!(
                ?slot_id,
                request = request.0,
                current = slot.request.0,
                "Dropping stale profile response"
            );
            return false;
        }

        slot.state = match result {
            Ok(profile) => {
                debug!(username = %slot.username, user_id = %profile.id, "Profile loaded");
                QueryState::Loaded(LoadedProfile::new(profile))
            }
            Err(e) => {
                warn!(username = %slot.username, "Profile query failed: {}", e);
                QueryState::Error(e.to_string())
            }
        };
        true
    }

    fn follow_resolved(
        &mut self,
        user_id: &UserId,
        ticket: MutationTicket,
        result: Result<FollowStatus, ApiError>,
    ) -> bool {
        // Some(server value) on success, None when the mutation failed
        let outcome = match &result {
            Ok(status) => {
                if &status.user_id != user_id {
                    warn!(
                        requested = %user_id,
                        returned = %status.user_id,
                        "Mutation response names a different user"
                    );
                }
                Some(status.viewer_is_following)
            }
            Err(e) => {
                warn!(%user_id, %ticket, "Follow mutation failed: {}", e);
                None
            }
        };

        let mut changed = false;
        let mut matched = false;
        for slot in self.model.slots_mut() {
            let QueryState::Loaded(loaded) = &mut slot.state else {
                continue;
            };
            let resolution = match outcome {
                Some(value) => loaded.follow.settle(user_id, ticket, value),
                None => loaded.follow.compensate(user_id, ticket),
            };
            debug!(username = %slot.username, %ticket, ?resolution, "Reconciled follow response");
            matched |= !matches!(
                resolution,
                Resolution::Ignored(IgnoreReason::ForeignEntity | IgnoreReason::UnknownTicket)
            );
            changed |= resolution.changed_state();
        }

        if !matched {
            warn!(%user_id, %ticket, "Ignoring follow response for an entity no longer displayed");
        }
        changed
    }

    fn allocate_request(&mut self) -> RequestId {
        let request = RequestId(self.next_request);
        self.next_request += 1;
        request
    }
}
