//! Non-interactive subcommands

use profile_core::ProfileService;
use profile_service::{FakeNetworkService, FieldKind, FieldValue, ServiceConfig};
use std::time::Duration;
use tracing::info;

/// Fetch a single field with its own latency and failure roll.
pub async fn fetch_field(
    service: &FakeNetworkService,
    kind: FieldKind,
) -> profile_core::Result<FieldValue> {
    info!(field = %kind, "Fetching single field");
    service.fetch_field(kind).await
}

/// Result of running many profile fetches back to back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReport {
    pub trials: usize,
    pub failures: usize,
}

impl SampleReport {
    pub fn failure_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.failures as f64 / self.trials as f64
        }
    }
}

/// Run `trials` zero-latency fetches with the configured failure threshold
/// and count the failures.
pub async fn sample(config: &ServiceConfig, seed: Option<u64>, trials: usize) -> SampleReport {
    let config = ServiceConfig {
        profile_latency: Duration::ZERO,
        ..config.clone()
    };
    let service = match seed {
        Some(seed) => FakeNetworkService::with_seed(config, seed),
        None => FakeNetworkService::new(config),
    };

    let mut failures = 0;
    for _ in 0..trials {
        if service.fetch_user_profile().await.is_err() {
            failures += 1;
        }
    }

    info!(trials, failures, "Sampling complete");
    SampleReport { trials, failures }
}
