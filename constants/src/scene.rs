/// Number of stars generated at startup. Never changes afterwards.
pub const PARTICLE_COUNT: usize = 50_000;

/// Half-width of the cube the stars are spawned in, per axis.
pub const PARTICLE_EXTENT: f32 = 300.0;

/// Distance every star falls per frame.
pub const PARTICLE_FALL_STEP: f32 = 1.0;

/// Stars below this height are moved back to the top.
pub const PARTICLE_FLOOR: f32 = -300.0;

/// Height a recycled star restarts from.
pub const PARTICLE_CEILING: f32 = 300.0;

/// Point size of the star material (world units).
pub const PARTICLE_POINT_SIZE: f32 = 0.7;

/// Initial star colour.
pub const PARTICLE_BASE_COLOUR: u32 = 0xffffff;

/// Largest colour the cycler may pick (24-bit RGB).
pub const MAX_RGB_COLOUR: u32 = 0xffffff;

/// Period of the random star colour change.
pub const COLOUR_CYCLE_PERIOD_MS: u64 = 3000;

/// Fixed seed for the scene RNG. `None` seeds from entropy.
pub const RNG_SEED: Option<u64> = None;

/// Background clear colour.
pub const CLEAR_COLOUR: u32 = 0x000000;
