//! Latency and failure settings for the simulated service.

use crate::fields::FieldKind;
use std::time::Duration;

/// Smallest value a request roll can take.
pub const ROLL_MIN: u8 = 1;

/// Largest value a request roll can take.
pub const ROLL_MAX: u8 = 10;

/// Configuration for [`FakeNetworkService`](crate::FakeNetworkService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Latency of the combined profile fetch
    pub profile_latency: Duration,
    /// Latency of the first name fetch
    pub first_name_latency: Duration,
    /// Latency of the last name fetch
    pub last_name_latency: Duration,
    /// Latency of the age fetch
    pub age_latency: Duration,
    /// Latency of the post code fetch
    pub post_code_latency: Duration,
    /// Rolls above this value fail. `ROLL_MAX` never fails, `0` always fails.
    pub failure_threshold: u8,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            profile_latency: Duration::from_millis(3000),
            first_name_latency: Duration::from_millis(1000),
            last_name_latency: Duration::from_millis(1500),
            age_latency: Duration::from_millis(2000),
            post_code_latency: Duration::from_millis(2500),
            failure_threshold: 7,
        }
    }
}

impl ServiceConfig {
    /// Default failure rate with every latency set to zero.
    pub fn instant() -> Self {
        Self {
            profile_latency: Duration::ZERO,
            first_name_latency: Duration::ZERO,
            last_name_latency: Duration::ZERO,
            age_latency: Duration::ZERO,
            post_code_latency: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Replace the failure threshold.
    pub fn with_failure_threshold(mut self, threshold: u8) -> Self {
        self.failure_threshold = threshold;
        self
    }

    /// Never fail.
    pub fn always_succeed(self) -> Self {
        self.with_failure_threshold(ROLL_MAX)
    }

    /// Always fail.
    pub fn always_fail(self) -> Self {
        self.with_failure_threshold(0)
    }

    /// Latency of a single-field request.
    pub fn field_latency(&self, kind: FieldKind) -> Duration {
        match kind {
            FieldKind::FirstName => self.first_name_latency,
            FieldKind::LastName => self.last_name_latency,
            FieldKind::Age => self.age_latency,
            FieldKind::PostCode => self.post_code_latency,
        }
    }

    /// Expected share of failing requests, in percent.
    pub fn failure_percent(&self) -> u32 {
        let threshold = self.failure_threshold.min(ROLL_MAX);
        u32::from(ROLL_MAX - threshold) * 100 / u32::from(ROLL_MAX - ROLL_MIN + 1)
    }
}
