//! Profile Presenter
//!
//! Presentation state for the single profile screen.
//!
//! This crate provides:
//! - [`ProfileViewModel`]: holds the current profile / error message and
//!   starts fetches against an injected [`ProfileService`]
//! - [`FetchHandle`]: explicit handle for every started fetch (await or cancel)
//! - State snapshots over a `watch` channel and [`ProfileEvent`]s over a
//!   `broadcast` channel, so a renderer never needs to poll
//! - [`render`]: pure conversion of a snapshot into display lines
//!
//! # Architecture
//!
//! `profile-presenter` knows nothing about terminals or widgets. The viewer
//! binary subscribes to snapshots and prints whatever [`render`] returns.
//!
//! # Example
//!
//! ```rust,no_run
//! use profile_presenter::{render, ProfileViewModel};
//! use profile_core::ProfileService;
//! use std::sync::Arc;
//!
//! async fn show(service: Arc<dyn ProfileService>) {
//!     let view_model = ProfileViewModel::new(service);
//!     let mut snapshots = view_model.subscribe();
//!
//!     let handle = view_model.start_fetch();
//!     while snapshots.changed().await.is_ok() {
//!         for line in render(&snapshots.borrow_and_update()) {
//!             println!("{}", line.text);
//!         }
//!         if handle.is_finished() {
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! [`ProfileService`]: profile_core::ProfileService

mod error;
mod events;
mod handle;
mod render;
mod state;
mod view_model;

// Public exports
pub use error::{PresenterError, Result};
pub use events::ProfileEvent;
pub use handle::{FetchHandle, FetchId};
pub use render::{render, LineStyle, ViewLine, LOADING_TEXT};
pub use state::{ProfileState, StatePhase, FAILED_TO_LOAD};
pub use view_model::{ProfileViewModel, StalePolicy};
