/// Outcome of a single profile fetch
use crate::error::FetchError;
use crate::types::UserProfile;

/// Exclusive result of one fetch: either a profile or an error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The service returned a profile
    Loaded(UserProfile),
    /// The service failed
    Failed(FetchError),
}

impl FetchOutcome {
    /// The loaded profile, if any
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            FetchOutcome::Loaded(profile) => Some(profile),
            FetchOutcome::Failed(_) => None,
        }
    }

    /// Check if the fetch failed
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

impl From<crate::Result<UserProfile>> for FetchOutcome {
    fn from(result: crate::Result<UserProfile>) -> Self {
        match result {
            Ok(profile) => FetchOutcome::Loaded(profile),
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}
