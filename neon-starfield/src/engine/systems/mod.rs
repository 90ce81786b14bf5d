//! Per-frame runtime systems.
//!
//! Frame ordering, the colour timer, viewport resizing and FPS logging.

/// Frame sets and the once-per-update composite step.
///
/// Orders text animation, particle advance and composition within `Update`.
pub mod frame_driver;

/// Repeating timer that recolours the star field.
pub mod colour_cycler;

/// Window resize handling for the viewport, camera and pipeline.
pub mod resize;

/// Periodic FPS logging from the frame time diagnostics.
pub mod fps_tracking;
