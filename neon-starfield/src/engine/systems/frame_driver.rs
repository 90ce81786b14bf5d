use bevy::prelude::*;

use crate::engine::render::post_processing::PostProcessingPipeline;
use crate::engine::scene::particles::{
    advance_particles, sync_particle_colour, upload_particle_buffer,
};
use crate::engine::scene::text_display::rotate_text;

/// The three ordered steps of every frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    AnimateText,
    AdvanceParticles,
    Composite,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub ticks: u64,
    pub composites: u64,
}

pub fn begin_frame(mut stats: ResMut<FrameStats>) {
    stats.ticks += 1;
}

pub fn composite_frame(
    mut pipeline: ResMut<PostProcessingPipeline>,
    mut stats: ResMut<FrameStats>,
) {
    pipeline.render();
    stats.composites += 1;
}

/// Runs text animation, then the particle step, then composition, once
/// per app update.
pub struct FrameDriverPlugin;

impl Plugin for FrameDriverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameStats>()
            .configure_sets(
                Update,
                (
                    FrameSet::AnimateText,
                    FrameSet::AdvanceParticles,
                    FrameSet::Composite,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (begin_frame, rotate_text)
                        .chain()
                        .in_set(FrameSet::AnimateText),
                    (advance_particles, upload_particle_buffer)
                        .chain()
                        .in_set(FrameSet::AdvanceParticles),
                    (sync_particle_colour, composite_frame)
                        .chain()
                        .in_set(FrameSet::Composite),
                ),
            );
    }
}
