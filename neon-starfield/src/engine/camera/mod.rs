//! Fixed perspective camera and the viewport it renders into.
//!
//! The camera never moves; only its aspect ratio follows the surface size.

/// Scene camera, viewport size resource and resize application.
pub mod viewport_camera;
