use bevy::core_pipeline::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use bevy::prelude::*;
use constants::render_settings::{
    BLOOM_INTENSITY_PER_STRENGTH, BLOOM_RADIUS, BLOOM_STRENGTH, BLOOM_THRESHOLD,
};

use crate::engine::error::{SceneError, SceneResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomPass {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomPass {
    fn default() -> Self {
        Self {
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

impl BloomPass {
    /// Bevy's bloom camera component for these settings.
    pub fn to_bloom(&self) -> Bloom {
        Bloom {
            intensity: self.strength * BLOOM_INTENSITY_PER_STRENGTH,
            low_frequency_boost: self.radius,
            prefilter: BloomPrefilter {
                threshold: self.threshold,
                threshold_softness: 0.0,
            },
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PipelinePass {
    /// Main camera render of the scene graph.
    Scene,
    Bloom(BloomPass),
}

impl PipelinePass {
    fn name(&self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Bloom(_) => "bloom",
        }
    }
}

/// A pass plus the render target size it was last configured for.
#[derive(Debug, Clone, PartialEq)]
pub struct PassStage {
    pub pass: PipelinePass,
    pub target_size: UVec2,
}

/// Ordered chain of passes composited once per frame.
///
/// The GPU side is Bevy's render graph; this resource holds the validated
/// pass configuration, keeps every pass sized to the viewport and counts
/// composited frames.
#[derive(Resource, Debug, Clone)]
pub struct PostProcessingPipeline {
    stages: Vec<PassStage>,
    frames_rendered: u64,
}

impl PostProcessingPipeline {
    /// Validate and build a pipeline. The scene pass must come first and
    /// appear once; at most one bloom pass may follow it.
    pub fn new(passes: Vec<PipelinePass>, target_size: UVec2) -> SceneResult<Self> {
        match passes.first() {
            Some(PipelinePass::Scene) => {}
            Some(other) => {
                return Err(SceneError::InvalidPassOrder(format!(
                    "{} pass before the scene render",
                    other.name()
                )));
            }
            None => {
                return Err(SceneError::InvalidPassOrder(
                    "pipeline has no scene pass".to_string(),
                ));
            }
        }

        for (index, pass) in passes.iter().enumerate().skip(1) {
            let duplicate = passes[..index]
                .iter()
                .any(|earlier| earlier.name() == pass.name());
            if duplicate {
                return Err(SceneError::InvalidPassOrder(format!(
                    "{} pass appears more than once",
                    pass.name()
                )));
            }
        }

        let stages = passes
            .into_iter()
            .map(|pass| PassStage { pass, target_size })
            .collect();

        Ok(Self {
            stages,
            frames_rendered: 0,
        })
    }

    /// Scene render followed by bloom with the configured neon settings.
    pub fn neon_default(target_size: UVec2) -> SceneResult<Self> {
        Self::new(
            vec![PipelinePass::Scene, PipelinePass::Bloom(BloomPass::default())],
            target_size,
        )
    }

    pub fn scene_only(target_size: UVec2) -> Self {
        Self {
            stages: vec![PassStage {
                pass: PipelinePass::Scene,
                target_size,
            }],
            frames_rendered: 0,
        }
    }

    /// Record one composited frame. Bevy's render graph runs the passes
    /// themselves once per app update.
    pub fn render(&mut self) {
        self.frames_rendered += 1;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = UVec2::new(width, height);
        for stage in &mut self.stages {
            stage.target_size = size;
        }
    }

    pub fn stages(&self) -> &[PassStage] {
        &self.stages
    }

    pub fn bloom_pass(&self) -> Option<&BloomPass> {
        self.stages.iter().find_map(|stage| match &stage.pass {
            PipelinePass::Bloom(bloom) => Some(bloom),
            PipelinePass::Scene => None,
        })
    }

    pub fn bloom_component(&self) -> Option<Bloom> {
        self.bloom_pass().map(BloomPass::to_bloom)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
