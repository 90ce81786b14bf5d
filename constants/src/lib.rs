//! Shared scene configuration for the neon starfield.
//!
//! Every tunable lives here as a compile-time constant so the render crate and
//! its tests agree on the same values.

/// Point cloud generation, motion and colour cycling.
pub mod scene;

/// Perspective camera placement and projection.
pub mod camera;

/// Ambient fill and the magenta point light.
pub mod lighting;

/// Extruded neon text and its font resource.
pub mod text;

/// Bloom pass parameters, window and logging settings.
pub mod render_settings;
