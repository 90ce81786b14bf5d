use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResized;
use bevy::winit::WinitSettings;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::LOG_FILTER;
use constants::text::FONT_EXTENSION;

use crate::engine::core::app_state::FrameMode;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::typeface::TypefaceFont;
use crate::engine::render::star_material::StarMaterial;
use crate::engine::scene::composition::NeonScenePlugin;
use crate::engine::systems::fps_tracking::fps_log_system;

/// Build the application for the given frame mode.
///
/// `DisplayRefresh` opens a window and renders through the full pipeline.
/// `Headless` keeps the same scene logic but no window or renderer, so ticks
/// are driven by calling `App::update` directly.
pub fn create_app(mode: FrameMode) -> App {
    let mut app = App::new();

    match mode {
        FrameMode::DisplayRefresh => {
            app.add_plugins(create_default_plugins())
                .add_plugins(MaterialPlugin::<StarMaterial> {
                    prepass_enabled: false,
                    shadows_enabled: false,
                    ..default()
                })
                .add_plugins(FrameTimeDiagnosticsPlugin::default())
                .insert_resource(WinitSettings::game())
                .add_systems(Update, fps_log_system);
        }
        FrameMode::Headless => {
            app.add_plugins(create_headless_plugins())
                .init_asset::<Mesh>()
                .init_asset::<StandardMaterial>()
                .init_asset::<StarMaterial>()
                .add_event::<WindowResized>();
        }
    }

    // Registers TypefaceFont as a loadable asset type from typeface JSON files.
    app.add_plugins(JsonAssetPlugin::<TypefaceFont>::new(&[FONT_EXTENSION]))
        .add_plugins(NeonScenePlugin);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}

fn create_headless_plugins() -> impl PluginGroup {
    MinimalPlugins.build().add(AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    })
}
