use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use super::api::ProfileApi;
use crate::services::store::{Action, Effect, Store, ViewModel};

/// Drives the [`Store`] from a single task.
///
/// Effects run as spawned tasks and report back through a channel, so the
/// store is only ever touched by whoever owns the app. Nothing is cancelled:
/// results that arrive for stale requests are dropped by the store.
pub struct FollowApp<A: ProfileApi> {
    store: Store,
    api: Arc<A>,
    completions_tx: mpsc::UnboundedSender<Action>,
    completions_rx: mpsc::UnboundedReceiver<Action>,
}

impl<A: ProfileApi> FollowApp<A> {
    pub fn new(api: Arc<A>, viewer_login: impl Into<String>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            store: Store::new(viewer_login),
            api,
            completions_tx,
            completions_rx,
        }
    }

    pub fn model(&self) -> &ViewModel {
        self.store.model()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.store.subscribe()
    }

    /// Apply an action and start whatever requests it produced.
    pub fn dispatch(&mut self, action: Action) {
        for effect in self.store.dispatch(action) {
            self.spawn_effect(effect);
        }
    }

    /// Wait for the next request to finish and feed its result to the store.
    pub async fn process_next_completion(&mut self) {
        // The app keeps a sender alive, so the channel never closes here.
        if let Some(action) = self.completions_rx.recv().await {
            self.dispatch(action);
        }
    }

    fn spawn_effect(&self, effect: Effect) {
        let api = Arc::clone(&self.api);
        let completions = self.completions_tx.clone();

        tokio::spawn(async move {
            let action = match effect {
                Effect::FetchProfile {
                    slot,
                    request,
                    username,
                } => Action::ProfileFetched {
                    slot,
                    request,
                    result: api.fetch_profile(&username).await,
                },
                Effect::SendMutation(request) => Action::FollowResolved {
                    result: api.apply_intent(request.intent, &request.user_id).await,
                    user_id: request.user_id,
                    ticket: request.ticket,
                },
            };

            if completions.send(action).is_err() {
                tracing::debug!("App dropped before request completed; discarding result");
            }
        });
    }
}
