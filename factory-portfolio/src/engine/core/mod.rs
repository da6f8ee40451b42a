//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! frame ordering and plugin wiring for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Loading to running transition.
pub mod app_state;

/// Palette hex decoding.
pub mod colour;

/// Frame system sets, the scene clock and the camera marker.
pub mod frame;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
