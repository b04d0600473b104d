//! Error types for presenter fetch handles

use thiserror::Error;

/// Errors returned when awaiting a fetch
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresenterError {
    /// The fetch was cancelled before it produced an outcome
    #[error("Fetch cancelled")]
    Cancelled,

    /// The fetch task panicked
    #[error("Fetch task panicked: {0}")]
    TaskPanicked(String),
}

/// Result type for presenter operations
pub type Result<T> = std::result::Result<T, PresenterError>;
