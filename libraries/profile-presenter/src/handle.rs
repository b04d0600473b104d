//! Handles for in-flight fetches

use crate::error::{PresenterError, Result};
use profile_core::FetchOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Identifier of a fetch started by a view model, unique per view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchId(u64);

impl FetchId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FetchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a fetch started by [`ProfileViewModel::start_fetch`].
///
/// Dropping the handle detaches the fetch: it still runs to completion and
/// writes its outcome.
///
/// [`ProfileViewModel::start_fetch`]: crate::ProfileViewModel::start_fetch
#[derive(Debug)]
pub struct FetchHandle {
    id: FetchId,
    cancel: Arc<Notify>,
    task: JoinHandle<Option<FetchOutcome>>,
}

impl FetchHandle {
    pub(crate) fn new(
        id: FetchId,
        cancel: Arc<Notify>,
        task: JoinHandle<Option<FetchOutcome>>,
    ) -> Self {
        Self { id, cancel, task }
    }

    /// Get the fetch ID
    pub fn id(&self) -> FetchId {
        self.id
    }

    /// Request cancellation.
    ///
    /// A cancelled fetch never writes its outcome to the view model. Has no
    /// effect if the fetch already resolved.
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }

    /// Check if the fetch has finished (resolved or cancelled)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the fetch to finish.
    ///
    /// Returns the outcome that was written to the view model, or
    /// [`PresenterError::Cancelled`] if the fetch was cancelled first.
    pub async fn wait(self) -> Result<FetchOutcome> {
        match self.task.await {
            Ok(Some(outcome)) => Ok(outcome),
            Ok(None) => Err(PresenterError::Cancelled),
            Err(e) if e.is_cancelled() => Err(PresenterError::Cancelled),
            Err(e) => Err(PresenterError::TaskPanicked(e.to_string())),
        }
    }
}
