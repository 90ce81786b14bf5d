use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH,
};

use crate::engine::render::post_processing::PostProcessingPipeline;

#[derive(Component)]
pub struct SceneCamera;

/// Size of the render surface in physical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

pub fn scene_projection(viewport: &Viewport) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        aspect_ratio: viewport.aspect_ratio(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
    }
}

/// Pick up the real window size before anything is sized from the viewport.
pub fn sync_initial_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    mut pipeline: ResMut<PostProcessingPipeline>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let (width, height) = (window.physical_width(), window.physical_height());
    if width == 0 || height == 0 {
        return;
    }

    *viewport = Viewport { width, height };
    pipeline.resize(width, height);
}

pub fn spawn_camera(
    mut commands: Commands,
    viewport: Res<Viewport>,
    pipeline: Res<PostProcessingPipeline>,
) {
    let mut camera = commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(scene_projection(&viewport)),
        Transform::from_translation(CAMERA_POSITION).looking_to(Vec3::NEG_Z, Vec3::Y),
        SceneCamera,
    ));

    if let Some(bloom) = pipeline.bloom_component() {
        camera.insert(bloom);
    }

    info!(
        "Camera spawned at {CAMERA_POSITION} for a {}x{} viewport",
        viewport.width, viewport.height
    );
}

/// Apply a new surface size to the viewport, the camera aspect and every
/// pipeline pass together. Zero-sized surfaces are ignored.
///
/// Returns whether anything changed.
pub fn apply_viewport_resize(
    viewport: &mut Viewport,
    projection: &mut Projection,
    pipeline: &mut PostProcessingPipeline,
    width: u32,
    height: u32,
) -> bool {
    if width == 0 || height == 0 {
        return false;
    }

    let resized = Viewport { width, height };
    if *viewport == resized {
        return false;
    }

    *viewport = resized;
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = viewport.aspect_ratio();
    }
    pipeline.resize(width, height);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Viewport, Projection, PostProcessingPipeline) {
        let viewport = Viewport::default();
        let projection = Projection::Perspective(scene_projection(&viewport));
        let pipeline = PostProcessingPipeline::neon_default(viewport.size()).unwrap();
        (viewport, projection, pipeline)
    }

    fn aspect(projection: &Projection) -> f32 {
        match projection {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => unreachable!(),
        }
    }

    #[test]
    fn projection_matches_camera_settings() {
        let projection = scene_projection(&Viewport {
            width: 1920,
            height: 1080,
        });
        assert!((projection.fov - 75f32.to_radians()).abs() < 1e-6);
        assert!((projection.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }

    #[test]
    fn resize_updates_all_three() {
        let (mut viewport, mut projection, mut pipeline) = setup();

        assert!(apply_viewport_resize(
            &mut viewport,
            &mut projection,
            &mut pipeline,
            800,
            600
        ));

        assert_eq!(viewport, Viewport { width: 800, height: 600 });
        assert!((aspect(&projection) - 800.0 / 600.0).abs() < 1e-6);
        assert!(
            pipeline
                .stages()
                .iter()
                .all(|s| s.target_size == UVec2::new(800, 600))
        );
    }

    #[test]
    fn same_size_twice_is_idempotent() {
        let (mut viewport, mut projection, mut pipeline) = setup();
        apply_viewport_resize(&mut viewport, &mut projection, &mut pipeline, 1024, 768);
        let snapshot = (viewport, aspect(&projection));

        assert!(!apply_viewport_resize(
            &mut viewport,
            &mut projection,
            &mut pipeline,
            1024,
            768
        ));
        assert_eq!((viewport, aspect(&projection)), snapshot);
    }

    #[test]
    fn zero_sized_surface_is_ignored() {
        let (mut viewport, mut projection, mut pipeline) = setup();

        assert!(!apply_viewport_resize(&mut viewport, &mut projection, &mut pipeline, 0, 600));
        assert!(!apply_viewport_resize(&mut viewport, &mut projection, &mut pipeline, 800, 0));

        assert_eq!(viewport, Viewport::default());
        assert!(aspect(&projection).is_finite());
        assert!(
            pipeline
                .stages()
                .iter()
                .all(|s| s.target_size == UVec2::new(1280, 720))
        );
    }
}
