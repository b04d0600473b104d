//! The profile screen's view model

use crate::events::ProfileEvent;
use crate::handle::{FetchHandle, FetchId};
use crate::state::{ProfileState, FAILED_TO_LOAD};
use profile_core::{FetchOutcome, ProfileService};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Notify};
use tracing::{debug, info, warn};

const EVENT_CAPACITY: usize = 64;

/// What happens to the previous outcome when a new fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Keep showing the previous profile or error until the new fetch
    /// resolves
    #[default]
    KeepUntilResolved,
    /// Reset to pending as soon as a fetch starts
    ClearOnStart,
}

/// Holds the current profile / error message and starts fetches.
///
/// Fetches are not sequenced: starting a second fetch while one is in
/// flight runs both, and whichever resolves last determines the state.
pub struct ProfileViewModel {
    service: Arc<dyn ProfileService>,
    state: Arc<watch::Sender<ProfileState>>,
    events: broadcast::Sender<ProfileEvent>,
    next_id: AtomicU64,
    stale_policy: StalePolicy,
}

impl ProfileViewModel {
    /// Create a view model backed by `service`
    pub fn new(service: Arc<dyn ProfileService>) -> Self {
        Self::with_stale_policy(service, StalePolicy::default())
    }

    pub fn with_stale_policy(service: Arc<dyn ProfileService>, stale_policy: StalePolicy) -> Self {
        let (state, _) = watch::channel(ProfileState::pending());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            service,
            state: Arc::new(state),
            events,
            next_id: AtomicU64::new(1),
            stale_policy,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver starts out holding the current state; `changed()`
    /// resolves on every write.
    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    /// Subscribe to fetch lifecycle events
    pub fn events(&self) -> broadcast::Receiver<ProfileEvent> {
        self.events.subscribe()
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.stale_policy
    }

    /// Start fetching the profile in the background.
    ///
    /// Returns immediately. On success the profile is stored and the error
    /// message cleared; on failure [`FAILED_TO_LOAD`] is stored and the
    /// profile cleared. Must be called from within a tokio runtime.
    pub fn start_fetch(&self) -> FetchHandle {
        let fetch_id = FetchId::new(self.next_id.fetch_add(1, Ordering::Relaxed));

        if self.stale_policy == StalePolicy::ClearOnStart {
            self.state.send_if_modified(|state| {
                if state.is_pending() {
                    false
                } else {
                    *state = ProfileState::pending();
                    true
                }
            });
        }

        info!(%fetch_id, "Starting profile fetch");
        let _ = self.events.send(ProfileEvent::FetchStarted { fetch_id });

        let cancel = Arc::new(Notify::new());
        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let cancelled = Arc::clone(&cancel);

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.notified() => {
                    info!(%fetch_id, "Profile fetch cancelled");
                    let _ = events.send(ProfileEvent::FetchCancelled { fetch_id });
                    None
                }
                result = service.fetch_user_profile() => {
                    let outcome = FetchOutcome::from(result);
                    Self::apply_outcome(&state, &events, fetch_id, &outcome);
                    Some(outcome)
                }
            }
        });

        FetchHandle::new(fetch_id, cancel, task)
    }

    fn apply_outcome(
        state: &watch::Sender<ProfileState>,
        events: &broadcast::Sender<ProfileEvent>,
        fetch_id: FetchId,
        outcome: &FetchOutcome,
    ) {
        let event = match outcome {
            FetchOutcome::Loaded(profile) => {
                debug!(%fetch_id, "Profile loaded");
                state.send_replace(ProfileState::loaded(profile.clone()));
                ProfileEvent::ProfileLoaded {
                    fetch_id,
                    profile: profile.clone(),
                }
            }
            FetchOutcome::Failed(error) => {
                warn!(%fetch_id, %error, "Profile fetch failed");
                state.send_replace(ProfileState::failed(FAILED_TO_LOAD));
                ProfileEvent::FetchFailed {
                    fetch_id,
                    message: FAILED_TO_LOAD.to_string(),
                }
            }
        };

        let _ = events.send(event);
    }
}

impl std::fmt::Debug for ProfileViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileViewModel")
            .field("state", &*self.state.borrow())
            .field("stale_policy", &self.stale_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::{FetchError, MockProfileService, UserProfile};

    fn mock_returning(result: profile_core::Result<UserProfile>) -> Arc<dyn ProfileService> {
        let mut service = MockProfileService::new();
        service
            .expect_fetch_user_profile()
            .returning(move || result.clone());
        Arc::new(service)
    }

    #[tokio::test]
    async fn test_fetch_ids_increase() {
        let view_model = ProfileViewModel::new(mock_returning(Err(FetchError::NetworkFailure)));

        let first = view_model.start_fetch();
        let second = view_model.start_fetch();
        assert!(second.id() > first.id());

        let _ = first.wait().await;
        let _ = second.wait().await;
    }

    #[tokio::test]
    async fn test_clear_on_start_does_not_notify_when_already_pending() {
        let view_model = ProfileViewModel::with_stale_policy(
            mock_returning(Ok(UserProfile::new("John", "Doe", 30, "12345"))),
            StalePolicy::ClearOnStart,
        );
        let mut snapshots = view_model.subscribe();

        let handle = view_model.start_fetch();
        handle.wait().await.unwrap();

        // Exactly one change: the loaded profile
        assert!(snapshots.has_changed().unwrap());
        assert_eq!(snapshots.borrow_and_update().phase(), crate::StatePhase::Loaded);
        assert!(!snapshots.has_changed().unwrap());
    }
}
