//! Scene contents and their per-frame behaviour.
//!
//! The composition plugin wires the star field, the lighting rig and the neon
//! text into the world; each component owns its own state and systems.

/// Hex colour conversion helpers.
pub mod colour;

/// Scene plugin: resources, startup order and per-frame system registration.
pub mod composition;

/// Ambient fill plus the magenta point light.
pub mod lighting;

/// Falling star field stored as a flat interleaved position buffer.
///
/// Stars fall one unit per frame and are recycled to the top of the volume.
pub mod particles;

/// Extruded neon text that appears once its font resolves and spins every frame.
pub mod text_display;
