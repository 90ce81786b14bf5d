use bevy::prelude::*;
use constants::scene::{CLEAR_COLOUR, RNG_SEED};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::colour::hex_colour;
use super::lighting::setup_lighting;
use super::particles::spawn_particle_field;
use crate::engine::camera::viewport_camera::{Viewport, spawn_camera, sync_initial_viewport};
use crate::engine::core::app_state::SceneRng;
use crate::engine::loading::font_request::{request_font, resolve_font_request};
use crate::engine::render::post_processing::PostProcessingPipeline;
use crate::engine::systems::colour_cycler::{ColourCycler, cycle_particle_colour};
use crate::engine::systems::frame_driver::{FrameDriverPlugin, FrameSet};
use crate::engine::systems::resize::handle_viewport_resize;

/// Builds the whole neon scene: resources, startup order and the per-frame
/// systems around the frame sets.
pub struct NeonScenePlugin;

impl Plugin for NeonScenePlugin {
    fn build(&self, app: &mut App) {
        let viewport = Viewport::default();
        let pipeline =
            PostProcessingPipeline::neon_default(viewport.size()).unwrap_or_else(|err| {
                error!("Post-processing pipeline rejected, rendering without bloom: {err}");
                PostProcessingPipeline::scene_only(viewport.size())
            });

        let mut rng = SceneRng::from_seed(RNG_SEED);
        let cycler_rng = StdRng::seed_from_u64(rng.0.r#gen());

        app.insert_resource(viewport)
            .insert_resource(pipeline)
            .insert_resource(ColourCycler::new(cycler_rng))
            .insert_resource(rng)
            .insert_resource(ClearColor(hex_colour(CLEAR_COLOUR)))
            .add_plugins(FrameDriverPlugin)
            .add_systems(
                Startup,
                (
                    sync_initial_viewport,
                    spawn_camera,
                    spawn_particle_field,
                    setup_lighting,
                    request_font,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    resolve_font_request.before(FrameSet::AnimateText),
                    (cycle_particle_colour, handle_viewport_resize).before(FrameSet::Composite),
                ),
            );
    }
}
