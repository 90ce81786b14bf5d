pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;

/// Engine bloom intensity per unit of bloom strength.
pub const BLOOM_INTENSITY_PER_STRENGTH: f32 = 0.2;

pub const WINDOW_TITLE: &str = "Neon Starfield";

/// Canvas selector used on wasm builds.
pub const WASM_CANVAS_SELECTOR: &str = "#bevy";

pub const LOG_FILTER: &str = "wgpu=error,naga=warn,neon_starfield=info";

/// Seconds between FPS log lines.
pub const FPS_LOG_INTERVAL_SECS: f32 = 5.0;

/// Star billboard shader, relative to the asset root.
pub const STAR_SHADER_PATH: &str = "shaders/star_points.wgsl";
