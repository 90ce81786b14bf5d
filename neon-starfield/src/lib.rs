//! Neon starfield: falling star particles, extruded neon text and bloom,
//! orchestrated on top of Bevy's renderer.

pub mod engine;
