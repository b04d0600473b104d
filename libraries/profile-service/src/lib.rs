//! Profile Service
//!
//! A simulated network service for user profiles. Every request sleeps for a
//! fixed latency, then rolls a number in `1..=10` and fails with
//! [`FetchError::NetworkFailure`](profile_core::FetchError) when the roll
//! exceeds the configured threshold (7 by default, i.e. 30% of requests).
//!
//! # Features
//!
//! - **Combined fetch**: [`fetch_user_profile`](profile_core::ProfileService::fetch_user_profile)
//!   after 3000 ms
//! - **Per-field fetches**: first name, last name, age, and post code with
//!   their own latencies (1000/1500/2000/2500 ms). These are independent
//!   calls; nothing composes them into a profile.
//! - **Deterministic runs**: seeded RNG and configurable thresholds
//!
//! # Example
//!
//! ```ignore
//! use profile_core::ProfileService;
//! use profile_service::{FakeNetworkService, ServiceConfig};
//!
//! let service = FakeNetworkService::new(ServiceConfig::default());
//! match service.fetch_user_profile().await {
//!     Ok(profile) => println!("Hello {}", profile.first_name()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod config;
mod fields;
mod roll;
mod service;

pub use config::{ServiceConfig, ROLL_MAX, ROLL_MIN};
pub use fields::{FieldKind, FieldValue, ParseFieldError};
pub use service::FakeNetworkService;
