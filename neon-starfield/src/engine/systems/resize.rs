use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::engine::camera::viewport_camera::{SceneCamera, Viewport, apply_viewport_resize};
use crate::engine::render::post_processing::PostProcessingPipeline;

/// Apply the most recent `WindowResized` of this frame.
///
/// Uses the window's physical size when the window entity exists, otherwise
/// the logical size carried by the event.
pub fn handle_viewport_resize(
    mut events: EventReader<WindowResized>,
    windows: Query<&Window>,
    mut cameras: Query<&mut Projection, With<SceneCamera>>,
    mut viewport: ResMut<Viewport>,
    mut pipeline: ResMut<PostProcessingPipeline>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    let (width, height) = match windows.get(event.window) {
        Ok(window) => (window.physical_width(), window.physical_height()),
        Err(_) => (event.width.round() as u32, event.height.round() as u32),
    };

    let Ok(mut projection) = cameras.single_mut() else {
        warn!("Resize to {width}x{height} ignored: no scene camera");
        return;
    };

    if apply_viewport_resize(
        &mut viewport,
        &mut projection,
        &mut pipeline,
        width,
        height,
    ) {
        info!("Viewport resized to {width}x{height}");
    }
}
