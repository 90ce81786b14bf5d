use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_LOG_INTERVAL_SECS;

use super::frame_driver::FrameStats;

pub fn fps_log_system(
    diagnostics: Res<DiagnosticsStore>,
    stats: Res<FrameStats>,
    mut last_log_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    if current_time - *last_log_time < FPS_LOG_INTERVAL_SECS {
        return;
    }

    if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
        if let Some(value) = fps.smoothed() {
            info!(
                "FPS: {value:.1} (ticks {}, composites {})",
                stats.ticks, stats.composites
            );
            *last_log_time = current_time;
        }
    }
}
