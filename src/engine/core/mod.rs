//! Core application setup.
//!
//! Handles app construction, window configuration and scene spawning for
//! the demo.

/// Application setup and plugin configuration for the Bevy app.
pub mod app_setup;

/// Primary window configuration.
pub mod window_config;
