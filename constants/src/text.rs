use bevy::math::Vec3;

/// Bundled typeface JSON font, relative to the asset root.
pub const FONT_PATH: &str = "fonts/neon_block.typeface.json";

/// Extension the typeface loader is registered for.
pub const FONT_EXTENSION: &str = "typeface.json";

pub const TEXT_CONTENT: &str = "Alvaro";
pub const TEXT_SIZE: f32 = 10.0;
pub const TEXT_DEPTH: f32 = 2.0;

/// Maximum chord error when flattening glyph curves (world units).
pub const TEXT_CURVE_TOLERANCE: f32 = 0.02;

pub const TEXT_POSITION: Vec3 = Vec3::new(-20.0, 0.0, -5.0);

/// Rotation added to both X and Y every frame (radians).
pub const TEXT_ROTATION_STEP: f32 = 0.05;

pub const TEXT_COLOUR: u32 = 0xff00ff;
pub const TEXT_EMISSIVE_COLOUR: u32 = 0xff00ff;
pub const TEXT_EMISSIVE_INTENSITY: f32 = 1.0;
pub const TEXT_ROUGHNESS: f32 = 0.2;
pub const TEXT_METALLIC: f32 = 0.8;

/// Glyph used when a character is missing from the font.
pub const FALLBACK_GLYPH: char = '?';
