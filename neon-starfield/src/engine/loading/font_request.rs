use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::text::{FONT_PATH, TEXT_CONTENT, TEXT_CURVE_TOLERANCE, TEXT_DEPTH, TEXT_SIZE};

use super::text_geometry::build_text_mesh;
use super::typeface::TypefaceFont;
use crate::engine::scene::text_display::{neon_material, spawn_neon_text};

/// State of the one font load the scene makes.
///
/// Moves from `Pending` to either `Ready` or `Unavailable` exactly once and
/// never goes back.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum FontRequest {
    Pending(Handle<TypefaceFont>),
    Ready(Entity),
    Unavailable,
}

impl FontRequest {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn text_entity(&self) -> Option<Entity> {
        match self {
            Self::Ready(entity) => Some(*entity),
            _ => None,
        }
    }
}

/// Start loading the font. Returns immediately; the frame loop keeps
/// running while the asset server reads the file.
pub fn request_font(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("Requesting font {FONT_PATH}");
    commands.insert_resource(FontRequest::Pending(asset_server.load(FONT_PATH)));
}

pub fn resolve_font_request(
    mut commands: Commands,
    mut request: ResMut<FontRequest>,
    asset_server: Res<AssetServer>,
    fonts: Res<Assets<TypefaceFont>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let FontRequest::Pending(handle) = &*request else {
        return;
    };
    let handle = handle.clone();

    if let Some(font) = fonts.get(&handle) {
        match build_text_mesh(
            font,
            TEXT_CONTENT,
            TEXT_SIZE,
            TEXT_DEPTH,
            TEXT_CURVE_TOLERANCE,
        ) {
            Ok(mesh) => {
                let entity = spawn_neon_text(
                    &mut commands,
                    meshes.add(mesh),
                    materials.add(neon_material()),
                );
                info!(
                    "Font {:?} ready, spawned text {TEXT_CONTENT:?}",
                    font.family_name
                );
                *request = FontRequest::Ready(entity);
            }
            Err(err) => {
                warn!("Font loaded but text could not be built, continuing without text: {err}");
                *request = FontRequest::Unavailable;
            }
        }
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&handle) {
        warn!("Font {FONT_PATH} unavailable, continuing without text: {err}");
        *request = FontRequest::Unavailable;
    }
}
