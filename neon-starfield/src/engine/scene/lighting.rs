use bevy::prelude::*;
use constants::lighting::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AMBIENT_COLOUR, AMBIENT_INTENSITY, POINT_LIGHT_COLOUR,
    POINT_LIGHT_INTENSITY, POINT_LIGHT_LUMENS_PER_UNIT, POINT_LIGHT_POSITION, POINT_LIGHT_RANGE,
};

use super::colour::hex_colour;

#[derive(Component)]
pub struct RigLight;

pub fn ambient_light() -> AmbientLight {
    AmbientLight {
        color: hex_colour(AMBIENT_COLOUR),
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    }
}

pub fn rig_point_light() -> PointLight {
    PointLight {
        color: hex_colour(POINT_LIGHT_COLOUR),
        intensity: POINT_LIGHT_INTENSITY * POINT_LIGHT_LUMENS_PER_UNIT,
        range: POINT_LIGHT_RANGE,
        shadows_enabled: false,
        ..default()
    }
}

/// Runs once at startup. Nothing touches the lights afterwards.
pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ambient_light());
    commands.spawn((
        rig_point_light(),
        Transform::from_translation(POINT_LIGHT_POSITION),
        RigLight,
    ));
}
