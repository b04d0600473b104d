/// Viewer configuration
use crate::error::{AppError, Result};
use profile_presenter::StalePolicy;
use profile_service::{ServiceConfig, ROLL_MAX};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "profile-viewer.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_service")]
    pub service: ServiceSettings,

    #[serde(default = "default_view")]
    pub view: ViewSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    #[serde(default = "default_first_name_latency_ms")]
    pub first_name_latency_ms: u64,

    #[serde(default = "default_last_name_latency_ms")]
    pub last_name_latency_ms: u64,

    #[serde(default = "default_age_latency_ms")]
    pub age_latency_ms: u64,

    #[serde(default = "default_post_code_latency_ms")]
    pub post_code_latency_ms: u64,

    /// Rolls (1-10) above this value fail
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewSettings {
    #[serde(default = "default_color")]
    pub color: bool,

    /// Reset to "Loading..." when a fetch starts instead of keeping the
    /// previous outcome on screen
    #[serde(default)]
    pub clear_on_start: bool,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                // Load from config file if it exists
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. PROFILE_SERVICE__LATENCY_MS
        settings = settings.add_source(
            config::Environment::with_prefix("PROFILE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.failure_threshold > ROLL_MAX {
            return Err(AppError::Config(format!(
                "failure_threshold must be between 0 and {}, got {}",
                ROLL_MAX, self.service.failure_threshold
            )));
        }

        Ok(())
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            profile_latency: Duration::from_millis(self.service.latency_ms),
            first_name_latency: Duration::from_millis(self.service.first_name_latency_ms),
            last_name_latency: Duration::from_millis(self.service.last_name_latency_ms),
            age_latency: Duration::from_millis(self.service.age_latency_ms),
            post_code_latency: Duration::from_millis(self.service.post_code_latency_ms),
            failure_threshold: self.service.failure_threshold,
        }
    }

    pub fn stale_policy(&self) -> StalePolicy {
        if self.view.clear_on_start {
            StalePolicy::ClearOnStart
        } else {
            StalePolicy::KeepUntilResolved
        }
    }
}

// Default values
fn default_service() -> ServiceSettings {
    ServiceSettings {
        latency_ms: default_latency_ms(),
        first_name_latency_ms: default_first_name_latency_ms(),
        last_name_latency_ms: default_last_name_latency_ms(),
        age_latency_ms: default_age_latency_ms(),
        post_code_latency_ms: default_post_code_latency_ms(),
        failure_threshold: default_failure_threshold(),
    }
}

fn default_latency_ms() -> u64 {
    3000
}

fn default_first_name_latency_ms() -> u64 {
    1000
}

fn default_last_name_latency_ms() -> u64 {
    1500
}

fn default_age_latency_ms() -> u64 {
    2000
}

fn default_post_code_latency_ms() -> u64 {
    2500
}

fn default_failure_threshold() -> u8 {
    7
}

fn default_view() -> ViewSettings {
    ViewSettings {
        color: default_color(),
        clear_on_start: false,
    }
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            view: default_view(),
        }
    }
}
