//! Core application setup.
//!
//! Builds the Bevy app for windowed or headless runs and holds the
//! process-wide scene resources that do not belong to a single component.

/// App construction: plugin groups, asset loaders and the scene plugin.
pub mod app_setup;

/// Frame scheduling mode and the shared scene RNG.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds to the page canvas on web targets and enables vsync everywhere.
pub mod window_config;
