use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Fixed eye position. The camera looks down -Z.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 3.0, 50.0);

/// Surface size assumed until the first window size is known.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;
