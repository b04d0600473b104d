//! Core error types for profile fetching

use thiserror::Error;

/// Result type alias using `FetchError`
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised by a profile service
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The (simulated) request failed
    #[error("Network request failed")]
    NetworkFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_display() {
        assert_eq!(
            FetchError::NetworkFailure.to_string(),
            "Network request failed"
        );
    }
}
