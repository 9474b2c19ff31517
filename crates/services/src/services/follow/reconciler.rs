use tracing::{debug, warn};

use super::types::{FollowIntent, FollowPhase, MutationTicket, Profile, UserId};

/// Compensation record for one in-flight toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMutation {
    ticket: MutationTicket,
    intent: FollowIntent,
}

/// The mutation the runtime has to send for a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub user_id: UserId,
    pub ticket: MutationTicket,
    pub intent: FollowIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The response belongs to a different entity.
    ForeignEntity,
    /// The ticket was never issued by this tracker, or already resolved.
    UnknownTicket,
    /// A newer click owns the displayed value.
    Superseded,
}

/// Outcome of feeding a mutation result into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Settled { value: bool },
    RolledBack { value: bool },
    /// Server state recorded, displayed value left to a newer click.
    ConfirmedOnly { value: bool },
    Ignored(IgnoreReason),
}

impl Resolution {
    pub fn changed_state(self) -> bool {
        !matches!(self, Resolution::Ignored(_))
    }
}

/// Follow state of one entity, keyed by its id.
///
/// Every click gets a ticket. Only the ticket that owns the display may move
/// the displayed value; older tickets that resolve late only refresh the
/// confirmed server value, and only if nothing newer has been confirmed.
/// The newest click owns the display until it fails, then ownership passes
/// to the newest click still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowTracker {
    user_id: UserId,
    confirmed: bool,
    confirmed_by: Option<MutationTicket>,
    displayed: bool,
    phase: FollowPhase,
    pending: Vec<PendingMutation>,
    latest: Option<MutationTicket>,
}

impl FollowTracker {
    pub fn new(profile: &Profile) -> Self {
        Self {
            user_id: profile.id.clone(),
            confirmed: profile.viewer_is_following,
            confirmed_by: None,
            displayed: profile.viewer_is_following,
            phase: FollowPhase::Idle,
            pending: Vec::new(),
            latest: None,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Value the view should show.
    pub fn displayed(&self) -> bool {
        self.displayed
    }

    /// Last value the server reported.
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn phase(&self) -> FollowPhase {
        self.phase
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Intent a click would issue right now.
    pub fn intent(&self) -> FollowIntent {
        FollowIntent::from_following(self.displayed)
    }

    /// Apply the optimistic guess for a click and return the mutation to send.
    pub fn begin(&mut self, ticket: MutationTicket) -> MutationRequest {
        let intent = self.intent();
        self.pending.push(PendingMutation { ticket, intent });
        self.latest = Some(ticket);
        self.displayed = intent.optimistic_value();
        self.phase = FollowPhase::optimistic(intent);

        debug!(
            user_id = %self.user_id,
            %ticket,
            %intent,
            in_flight = self.pending.len(),
            "Applied optimistic follow state"
        );

        MutationRequest {
            user_id: self.user_id.clone(),
            ticket,
            intent,
        }
    }

    /// Commit a successful mutation. The server value always wins.
    pub fn settle(
        &mut self,
        user_id: &UserId,
        ticket: MutationTicket,
        server_value: bool,
    ) -> Resolution {
        let mutation = match self.take_pending(user_id, ticket) {
            Ok(mutation) => mutation,
            Err(reason) => return Resolution::Ignored(reason),
        };

        if server_value != mutation.intent.optimistic_value() {
            debug!(
                user_id = %self.user_id,
                %ticket,
                server_value,
                "Server disagreed with optimistic guess"
            );
        }

        if self.latest == Some(ticket) {
            if !self.confirmed_by.is_some_and(|newer| newer > ticket) {
                self.record_confirmed(ticket, server_value);
            }
            self.displayed = self.confirmed;
            self.phase = FollowPhase::Settled;
            return Resolution::Settled {
                value: self.confirmed,
            };
        }

        if self.confirmed_by.is_some_and(|newer| newer > ticket) {
            debug!(user_id = %self.user_id, %ticket, "Late response overtaken by newer result");
            return Resolution::Ignored(IgnoreReason::Superseded);
        }

        self.record_confirmed(ticket, server_value);
        Resolution::ConfirmedOnly {
            value: server_value,
        }
    }

    /// Compensate a failed mutation.
    ///
    /// While older clicks are still in flight the newest of them takes over
    /// the display and its guess is shown again. With nothing left in flight,
    /// or when a newer result is already confirmed, the display falls back
    /// to the last confirmed server value.
    pub fn compensate(&mut self, user_id: &UserId, ticket: MutationTicket) -> Resolution {
        let mutation = match self.take_pending(user_id, ticket) {
            Ok(mutation) => mutation,
            Err(reason) => return Resolution::Ignored(reason),
        };

        if self.latest != Some(ticket) {
            debug!(user_id = %self.user_id, %ticket, "Failed mutation already superseded");
            return Resolution::Ignored(IgnoreReason::Superseded);
        }

        let successor = self
            .pending
            .iter()
            .max_by_key(|pending| pending.ticket)
            .map(|pending| (pending.ticket, pending.intent));
        self.latest = successor.map(|(ticket, _)| ticket);

        let value = match successor {
            Some((older, intent)) if !self.confirmed_by.is_some_and(|newer| newer > older) => {
                self.phase = FollowPhase::optimistic(intent);
                intent.optimistic_value()
            }
            _ => {
                self.phase = FollowPhase::Idle;
                self.confirmed
            }
        };
        self.displayed = value;

        warn!(
            user_id = %self.user_id,
            %ticket,
            intent = %mutation.intent,
            value,
            in_flight = self.pending.len(),
            "Rolled back optimistic follow state"
        );

        Resolution::RolledBack { value }
    }

    fn take_pending(
        &mut self,
        user_id: &UserId,
        ticket: MutationTicket,
    ) -> Result<PendingMutation, IgnoreReason> {
        if user_id != &self.user_id {
            return Err(IgnoreReason::ForeignEntity);
        }

        let index = self
            .pending
            .iter()
            .position(|pending| pending.ticket == ticket)
            .ok_or(IgnoreReason::UnknownTicket)?;

        Ok(self.pending.remove(index))
    }

    fn record_confirmed(&mut self, ticket: MutationTicket, value: bool) {
        self.confirmed = value;
        self.confirmed_by = Some(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, following: bool) -> Profile {
        Profile {
            id: UserId::new(id),
            name: "The Octocat".to_string(),
            url: "https://github.com/octocat".to_string(),
            bio: String::new(),
            viewer_is_following: following,
        }
    }

    #[test]
    fn click_flips_display_before_any_response() {
        let mut tracker = FollowTracker::new(&profile("U_1", false));

        let request = tracker.begin(MutationTicket(1));

        assert_eq!(request.intent, FollowIntent::Follow);
        assert_eq!(request.user_id, UserId::new("U_1"));
        assert!(tracker.displayed());
        assert!(!tracker.confirmed());
        assert_eq!(tracker.phase(), FollowPhase::OptimisticFollowing);
        assert_eq!(tracker.in_flight(), 1);
    }

    #[test]
    fn success_matching_guess_settles() {
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));

        let resolution = tracker.settle(&UserId::new("U_1"), MutationTicket(1), true);

        assert_eq!(resolution, Resolution::Settled { value: true });
        assert!(tracker.displayed());
        assert!(tracker.confirmed());
        assert_eq!(tracker.phase(), FollowPhase::Settled);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn server_value_wins_over_guess() {
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));

        let resolution = tracker.settle(&UserId::new("U_1"), MutationTicket(1), false);

        assert_eq!(resolution, Resolution::Settled { value: false });
        assert!(!tracker.displayed());
        assert_eq!(tracker.intent(), FollowIntent::Follow);
    }

    #[test]
    fn failure_restores_pre_click_value() {
        for initial in [true, false] {
            let mut tracker = FollowTracker::new(&profile("U_1", initial));
            tracker.begin(MutationTicket(7));
            assert_eq!(tracker.displayed(), !initial);

            let resolution = tracker.compensate(&UserId::new("U_1"), MutationTicket(7));

            assert_eq!(resolution, Resolution::RolledBack { value: initial });
            assert_eq!(tracker.displayed(), initial);
            assert_eq!(tracker.phase(), FollowPhase::Idle);
        }
    }

    #[test]
    fn follow_then_unfollow_round_trips() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));

        let follow = tracker.begin(MutationTicket(1));
        tracker.settle(&id, follow.ticket, true);
        let unfollow = tracker.begin(MutationTicket(2));
        tracker.settle(&id, unfollow.ticket, false);

        assert_eq!(follow.intent, FollowIntent::Follow);
        assert_eq!(unfollow.intent, FollowIntent::Unfollow);
        assert!(!tracker.displayed());
        assert!(!tracker.confirmed());
        assert_eq!(tracker.phase(), FollowPhase::Settled);
    }

    #[test]
    fn response_for_other_entity_is_ignored() {
        let mut tracker = FollowTracker::new(&profile("U_new", false));

        let resolution = tracker.settle(&UserId::new("U_old"), MutationTicket(1), true);

        assert_eq!(resolution, Resolution::Ignored(IgnoreReason::ForeignEntity));
        assert!(!tracker.displayed());
        assert_eq!(tracker.phase(), FollowPhase::Idle);
    }

    #[test]
    fn unknown_or_repeated_ticket_is_ignored() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.settle(&id, MutationTicket(1), true);

        assert_eq!(
            tracker.settle(&id, MutationTicket(1), false),
            Resolution::Ignored(IgnoreReason::UnknownTicket)
        );
        assert_eq!(
            tracker.compensate(&id, MutationTicket(42)),
            Resolution::Ignored(IgnoreReason::UnknownTicket)
        );
        assert!(tracker.displayed());
    }

    #[test]
    fn double_click_computes_second_intent_from_optimistic_value() {
        let mut tracker = FollowTracker::new(&profile("U_1", false));

        let first = tracker.begin(MutationTicket(1));
        let second = tracker.begin(MutationTicket(2));

        assert_eq!(first.intent, FollowIntent::Follow);
        assert_eq!(second.intent, FollowIntent::Unfollow);
        assert!(!tracker.displayed());
        assert_eq!(tracker.phase(), FollowPhase::OptimisticUnfollowing);
        assert_eq!(tracker.in_flight(), 2);
    }

    #[test]
    fn double_click_in_order_resolution_keeps_latest() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));

        assert_eq!(
            tracker.settle(&id, MutationTicket(1), true),
            Resolution::ConfirmedOnly { value: true }
        );
        // newer optimistic guess still owns the display
        assert!(!tracker.displayed());
        assert!(tracker.confirmed());

        assert_eq!(
            tracker.settle(&id, MutationTicket(2), false),
            Resolution::Settled { value: false }
        );
        assert!(!tracker.displayed());
        assert!(!tracker.confirmed());
    }

    #[test]
    fn double_click_out_of_order_resolution_does_not_flip_flop() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));

        tracker.settle(&id, MutationTicket(2), false);
        let late = tracker.settle(&id, MutationTicket(1), true);

        assert_eq!(late, Resolution::Ignored(IgnoreReason::Superseded));
        assert!(!tracker.displayed());
        assert!(!tracker.confirmed());
        assert_eq!(tracker.phase(), FollowPhase::Settled);
    }

    #[test]
    fn latest_failure_with_older_in_flight_rolls_back_to_older_guess() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));

        let resolution = tracker.compensate(&id, MutationTicket(2));

        // back to the first click's guess, which is still in flight
        assert_eq!(resolution, Resolution::RolledBack { value: true });
        assert!(tracker.displayed());
        assert_eq!(tracker.phase(), FollowPhase::OptimisticFollowing);
        assert_eq!(tracker.in_flight(), 1);
    }

    #[test]
    fn older_failure_after_latest_failure_restores_confirmed_value() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));
        tracker.compensate(&id, MutationTicket(2));

        let resolution = tracker.compensate(&id, MutationTicket(1));

        assert_eq!(resolution, Resolution::RolledBack { value: false });
        assert!(!tracker.displayed());
        assert_eq!(tracker.displayed(), tracker.confirmed());
        assert_eq!(tracker.phase(), FollowPhase::Idle);
        assert_eq!(tracker.in_flight(), 0);
        assert_eq!(tracker.intent(), FollowIntent::Follow);
    }

    #[test]
    fn older_success_after_latest_failure_settles_display() {
        for server_value in [true, false] {
            let id = UserId::new("U_1");
            let mut tracker = FollowTracker::new(&profile("U_1", false));
            tracker.begin(MutationTicket(1));
            tracker.begin(MutationTicket(2));
            tracker.compensate(&id, MutationTicket(2));

            let resolution = tracker.settle(&id, MutationTicket(1), server_value);

            assert_eq!(resolution, Resolution::Settled { value: server_value });
            assert_eq!(tracker.displayed(), server_value);
            assert_eq!(tracker.displayed(), tracker.confirmed());
            assert_eq!(tracker.phase(), FollowPhase::Settled);
            assert_eq!(tracker.in_flight(), 0);
        }
    }

    #[test]
    fn failure_hands_display_to_oldest_over_newer_confirmation() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));
        tracker.begin(MutationTicket(3));
        tracker.settle(&id, MutationTicket(2), false);

        // #2 is confirmed and newer than the still pending #1
        assert_eq!(
            tracker.compensate(&id, MutationTicket(3)),
            Resolution::RolledBack { value: false }
        );
        assert_eq!(tracker.phase(), FollowPhase::Idle);

        let late = tracker.settle(&id, MutationTicket(1), true);

        assert_eq!(late, Resolution::Settled { value: false });
        assert!(!tracker.displayed());
        assert!(!tracker.confirmed());
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn latest_failure_after_older_success_uses_confirmed_value() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));
        tracker.settle(&id, MutationTicket(1), true);

        let resolution = tracker.compensate(&id, MutationTicket(2));

        assert_eq!(resolution, Resolution::RolledBack { value: true });
        assert!(tracker.displayed());
    }

    #[test]
    fn superseded_failure_leaves_newer_guess_alone() {
        let id = UserId::new("U_1");
        let mut tracker = FollowTracker::new(&profile("U_1", false));
        tracker.begin(MutationTicket(1));
        tracker.begin(MutationTicket(2));

        assert_eq!(
            tracker.compensate(&id, MutationTicket(1)),
            Resolution::Ignored(IgnoreReason::Superseded)
        );
        assert!(!tracker.displayed());

        // both failed: nothing ever reached the server
        assert_eq!(
            tracker.compensate(&id, MutationTicket(2)),
            Resolution::RolledBack { value: false }
        );
        assert!(!tracker.displayed());
    }
}
