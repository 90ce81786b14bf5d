use bevy::math::Vec3;

pub const AMBIENT_COLOUR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.2;

/// Ambient brightness (cd/m^2) per unit of scene intensity.
/// 0.2 maps to 80, the engine's default dim fill.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 400.0;

pub const POINT_LIGHT_COLOUR: u32 = 0xff00ff;
pub const POINT_LIGHT_INTENSITY: f32 = 2.0;
pub const POINT_LIGHT_RANGE: f32 = 200.0;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 20.0, 20.0);

/// Luminous power (lm) per unit of scene intensity.
pub const POINT_LIGHT_LUMENS_PER_UNIT: f32 = 500_000.0;
