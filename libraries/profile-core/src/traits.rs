//! Core traits for profile fetching

use crate::error::Result;
use crate::types::UserProfile;
use async_trait::async_trait;

/// Source of user profiles.
///
/// The presenter receives an implementation at construction time instead of
/// reaching for a shared global, so tests can substitute a deterministic
/// service (see `MockProfileService` behind the `mock` feature).
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the complete user profile.
    ///
    /// # Errors
    /// Returns [`crate::FetchError::NetworkFailure`] when the request fails
    async fn fetch_user_profile(&self) -> Result<UserProfile>;
}
