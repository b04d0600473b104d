//! Profile Events
//!
//! Event stream describing the lifecycle of each fetch. Snapshots tell a
//! renderer *what* to show; events tell observers *which* fetch did it.

use crate::handle::FetchId;
use profile_core::UserProfile;
use serde::{Deserialize, Serialize};

/// Events emitted by the view model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileEvent {
    /// A fetch was started
    FetchStarted {
        /// ID of the new fetch
        fetch_id: FetchId,
    },

    /// A fetch resolved with a profile and it was written to the state
    ProfileLoaded {
        fetch_id: FetchId,
        profile: UserProfile,
    },

    /// A fetch failed and the error message was written to the state
    FetchFailed {
        fetch_id: FetchId,
        /// Message now shown to the user
        message: String,
    },

    /// A fetch was cancelled through its handle; the state was not touched
    FetchCancelled { fetch_id: FetchId },
}

impl ProfileEvent {
    /// The fetch this event belongs to
    pub fn fetch_id(&self) -> FetchId {
        match self {
            ProfileEvent::FetchStarted { fetch_id }
            | ProfileEvent::ProfileLoaded { fetch_id, .. }
            | ProfileEvent::FetchFailed { fetch_id, .. }
            | ProfileEvent::FetchCancelled { fetch_id } => *fetch_id,
        }
    }

    /// Check if this event ends a fetch
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProfileEvent::FetchStarted { .. })
    }
}
