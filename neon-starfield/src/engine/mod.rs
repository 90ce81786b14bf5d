pub mod camera;
pub mod core;
pub mod error;
pub mod loading;
pub mod render;
pub mod scene;
pub mod systems;
