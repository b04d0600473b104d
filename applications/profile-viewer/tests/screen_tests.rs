//! End-to-end tests for the profile screen
//!
//! The screen is mounted against the simulated service and its output is
//! captured in memory.

use profile_core::{FetchError, FetchOutcome};
use profile_presenter::{PresenterError, ProfileViewModel, StalePolicy};
use profile_service::{FakeNetworkService, ServiceConfig};
use profile_viewer::error::AppError;
use profile_viewer::screen::{mount, OutputFormat};
use std::future::pending;
use std::sync::Arc;
use std::time::Duration;

const PLAIN: OutputFormat = OutputFormat::Text { color: false };

fn view_model(config: ServiceConfig) -> ProfileViewModel {
    ProfileViewModel::new(Arc::new(FakeNetworkService::new(config)))
}

#[tokio::test(start_paused = true)]
async fn test_mount_shows_loading_then_profile() {
    let view_model = view_model(ServiceConfig::default().always_succeed());
    let mut out = Vec::new();

    let outcome = mount(&view_model, &mut out, PLAIN, pending()).await.unwrap();

    assert!(matches!(outcome, FetchOutcome::Loaded(_)));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Loading...\nFirst Name: John\nLast Name: Doe\nAge: 30\nPost Code: 12345\n"
    );
}

#[tokio::test(start_paused = true)]
async fn test_mount_shows_loading_then_error() {
    let view_model = view_model(ServiceConfig::default().always_fail());
    let mut out = Vec::new();

    let outcome = mount(&view_model, &mut out, PLAIN, pending()).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Failed(FetchError::NetworkFailure));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Loading...\nFailed to load user data!\n"
    );
}

#[tokio::test(start_paused = true)]
async fn test_mount_starts_exactly_one_fetch() {
    let view_model = view_model(ServiceConfig::default().always_succeed());
    let mut events = view_model.events();
    let mut out = Vec::new();

    mount(&view_model, &mut out, PLAIN, pending()).await.unwrap();

    let mut started = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, profile_presenter::ProfileEvent::FetchStarted { .. }) {
            started += 1;
        }
    }
    assert_eq!(started, 1);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_fetch() {
    let view_model = view_model(ServiceConfig::default().always_succeed());
    let mut out = Vec::new();

    let shutdown = tokio::time::sleep(Duration::from_millis(500));
    let result = mount(&view_model, &mut out, PLAIN, shutdown).await;

    assert!(matches!(
        result,
        Err(AppError::Fetch(PresenterError::Cancelled))
    ));
    assert_eq!(String::from_utf8(out).unwrap(), "Loading...\n");

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(view_model.state().is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_json_output_has_one_line_per_snapshot() {
    let view_model = ProfileViewModel::with_stale_policy(
        Arc::new(FakeNetworkService::new(
            ServiceConfig::instant().always_succeed(),
        )),
        StalePolicy::ClearOnStart,
    );
    let mut out = Vec::new();

    mount(&view_model, &mut out, OutputFormat::Json, pending())
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0]["profile"].is_null());
    assert_eq!(lines[1]["profile"]["first_name"], "John");
    assert!(lines[1]["error_message"].is_null());
}
