//! The simulated network service.

use crate::config::ServiceConfig;
use crate::fields::{FieldKind, FieldValue};
use crate::roll::RollSource;
use async_trait::async_trait;
use profile_core::{FetchError, ProfileService, Result, UserProfile};
use std::time::Duration;
use tracing::{debug, warn};

const FIRST_NAME: &str = "John";
const LAST_NAME: &str = "Doe";
const AGE: u32 = 30;
const POST_CODE: &str = "12345";

/// Simulated network service.
///
/// Performs no I/O. Each request waits for its configured latency, then
/// succeeds with a fixed payload or fails with
/// [`FetchError::NetworkFailure`]. There is no retry and no timeout beyond
/// the latency itself; dropping the returned future is the only way to stop
/// a request early.
#[derive(Debug)]
pub struct FakeNetworkService {
    config: ServiceConfig,
    rolls: RollSource,
}

impl Default for FakeNetworkService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl FakeNetworkService {
    /// Create a service drawing from thread-local randomness.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            rolls: RollSource::Thread,
        }
    }

    /// Create a service whose outcomes are reproducible for a given seed.
    pub fn with_seed(config: ServiceConfig, seed: u64) -> Self {
        Self {
            config,
            rolls: RollSource::seeded(seed),
        }
    }

    /// Get the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetch the first name on its own.
    pub async fn fetch_first_name(&self) -> Result<String> {
        self.simulate(
            "first_name",
            self.config.first_name_latency,
            FIRST_NAME.to_string(),
        )
        .await
    }

    /// Fetch the last name on its own.
    pub async fn fetch_last_name(&self) -> Result<String> {
        self.simulate(
            "last_name",
            self.config.last_name_latency,
            LAST_NAME.to_string(),
        )
        .await
    }

    /// Fetch the age on its own.
    pub async fn fetch_age(&self) -> Result<u32> {
        self.simulate("age", self.config.age_latency, AGE).await
    }

    /// Fetch the post code on its own.
    pub async fn fetch_post_code(&self) -> Result<String> {
        self.simulate(
            "post_code",
            self.config.post_code_latency,
            POST_CODE.to_string(),
        )
        .await
    }

    /// Fetch a single field selected at runtime.
    pub async fn fetch_field(&self, kind: FieldKind) -> Result<FieldValue> {
        match kind {
            FieldKind::FirstName => self.fetch_first_name().await.map(FieldValue::Text),
            FieldKind::LastName => self.fetch_last_name().await.map(FieldValue::Text),
            FieldKind::Age => self.fetch_age().await.map(FieldValue::Number),
            FieldKind::PostCode => self.fetch_post_code().await.map(FieldValue::Text),
        }
    }

    async fn simulate<T: Send>(
        &self,
        request: &'static str,
        latency: Duration,
        value: T,
    ) -> Result<T> {
        debug!(request, latency_ms = latency.as_millis() as u64, "Simulating request");

        tokio::time::sleep(latency).await;

        let roll = self.rolls.roll();
        if roll > self.config.failure_threshold {
            warn!(
                request,
                roll,
                threshold = self.config.failure_threshold,
                "Simulated request failed"
            );
            return Err(FetchError::NetworkFailure);
        }

        debug!(request, roll, "Simulated request succeeded");
        Ok(value)
    }
}

#[async_trait]
impl ProfileService for FakeNetworkService {
    async fn fetch_user_profile(&self) -> Result<UserProfile> {
        self.simulate(
            "user_profile",
            self.config.profile_latency,
            UserProfile::new(FIRST_NAME, LAST_NAME, AGE, POST_CODE),
        )
        .await
    }
}
