//! Profile Core
//!
//! Platform-agnostic types, traits, and error handling shared by the
//! profile service stub, the presenter, and the viewer binary.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserProfile`
//! - **Core Traits**: `ProfileService`, the injected fetch interface
//! - **Error Handling**: `FetchError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use profile_core::UserProfile;
//!
//! let profile = UserProfile::new("John", "Doe", 30, "12345");
//! assert_eq!(profile.first_name(), "John");
//! assert_eq!(profile.age(), 30);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{FetchError, Result};
pub use traits::ProfileService;
pub use types::{FetchOutcome, UserProfile};

#[cfg(any(test, feature = "mock"))]
pub use traits::MockProfileService;
