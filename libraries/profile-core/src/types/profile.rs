/// User profile domain type
use serde::{Deserialize, Serialize};

/// A user's profile as returned by a profile service.
///
/// All four fields are supplied together at construction and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    first_name: String,
    last_name: String,
    age: u32,
    post_code: String,
}

impl UserProfile {
    /// Create a new profile
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        post_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            post_code: post_code.into(),
        }
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Age in years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Postal code
    pub fn post_code(&self) -> &str {
        &self.post_code
    }
}
