//! Profile Viewer
//!
//! Terminal front end for the profile screen: loads configuration, builds
//! the simulated service, mounts the screen, and prints every state
//! snapshot as it changes.

pub mod commands;
pub mod config;
pub mod error;
pub mod screen;
