use bevy::prelude::*;
use constants::text::{
    TEXT_COLOUR, TEXT_EMISSIVE_COLOUR, TEXT_EMISSIVE_INTENSITY, TEXT_METALLIC, TEXT_POSITION,
    TEXT_ROTATION_STEP, TEXT_ROUGHNESS,
};

use super::colour::{hex_colour, hex_emissive};

#[derive(Component)]
pub struct NeonText;

/// Accumulated Euler angles of the text, in radians.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct TextRotation {
    pub x: f32,
    pub y: f32,
}

impl TextRotation {
    pub fn advance(&mut self) {
        self.x += TEXT_ROTATION_STEP;
        self.y += TEXT_ROTATION_STEP;
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

pub fn neon_material() -> StandardMaterial {
    StandardMaterial {
        base_color: hex_colour(TEXT_COLOUR),
        emissive: hex_emissive(TEXT_EMISSIVE_COLOUR, TEXT_EMISSIVE_INTENSITY),
        perceptual_roughness: TEXT_ROUGHNESS,
        metallic: TEXT_METALLIC,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub fn spawn_neon_text(
    commands: &mut Commands,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
) -> Entity {
    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(TEXT_POSITION),
            NeonText,
            TextRotation::default(),
        ))
        .id()
}

/// Frame step (a). Does nothing until the text exists.
pub fn rotate_text(mut texts: Query<(&mut TextRotation, &mut Transform), With<NeonText>>) {
    for (mut rotation, mut transform) in &mut texts {
        rotation.advance();
        transform.rotation = rotation.to_quat();
    }
}
