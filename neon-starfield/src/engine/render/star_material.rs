use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};
use constants::render_settings::STAR_SHADER_PATH;

/// Uniform read by the star shader. `point_size` is the billboard edge
/// length in world units.
#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
#[repr(C)]
pub struct StarUniform {
    pub colour: Vec4,
    pub point_size: f32,
}

/// Unlit billboard material for the star field.
///
/// Each star is six mesh vertices sharing one centre; the vertex shader
/// pushes them out to a camera-facing quad of `point_size` and the fragment
/// shader cuts it to a disc.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct StarMaterial {
    #[uniform(0)]
    pub uniform: StarUniform,
}

impl StarMaterial {
    pub fn new(colour: Color, point_size: f32) -> Self {
        Self {
            uniform: StarUniform {
                colour: linear_vec4(colour),
                point_size,
            },
        }
    }

    pub fn set_colour(&mut self, colour: Color) {
        self.uniform.colour = linear_vec4(colour);
    }

    pub fn point_size(&self) -> f32 {
        self.uniform.point_size
    }
}

impl Material for StarMaterial {
    fn vertex_shader() -> ShaderRef {
        STAR_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        STAR_SHADER_PATH.into()
    }
}

fn linear_vec4(colour: Color) -> Vec4 {
    let LinearRgba {
        red,
        green,
        blue,
        alpha,
    } = colour.to_linear();
    Vec4::new(red, green, blue, alpha)
}
