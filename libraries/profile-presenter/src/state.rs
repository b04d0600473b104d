//! Observable presentation state

use profile_core::UserProfile;
use serde::{Deserialize, Serialize};

/// Message shown when a fetch fails.
pub const FAILED_TO_LOAD: &str = "Failed to load user data!";

/// Snapshot of the profile screen state.
///
/// At most one of `profile` / `error_message` is set. Neither set means the
/// first fetch has not resolved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    profile: Option<UserProfile>,
    error_message: Option<String>,
}

/// Which of the three display branches a state selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatePhase {
    Pending,
    Loaded,
    Failed,
}

impl ProfileState {
    /// State with no outcome yet
    pub fn pending() -> Self {
        Self::default()
    }

    /// State holding a loaded profile
    pub fn loaded(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            error_message: None,
        }
    }

    /// State holding an error message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            profile: None,
            error_message: Some(message.into()),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> StatePhase {
        match (&self.profile, &self.error_message) {
            (Some(_), _) => StatePhase::Loaded,
            (None, Some(_)) => StatePhase::Failed,
            (None, None) => StatePhase::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == StatePhase::Pending
    }
}
