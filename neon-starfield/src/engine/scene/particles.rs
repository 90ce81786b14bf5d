use bevy::prelude::*;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use constants::scene::{
    MAX_RGB_COLOUR, PARTICLE_BASE_COLOUR, PARTICLE_CEILING, PARTICLE_COUNT, PARTICLE_EXTENT,
    PARTICLE_FALL_STEP, PARTICLE_FLOOR, PARTICLE_POINT_SIZE,
};
use rand::Rng;

use super::colour::hex_colour;
use crate::engine::core::app_state::SceneRng;
use crate::engine::error::{SceneError, SceneResult};
use crate::engine::render::star_material::StarMaterial;

/// Mesh vertices per star: two triangles forming one billboard quad.
pub const VERTICES_PER_STAR: usize = 6;

/// Quad-space corner of each of a star's six vertices.
const QUAD_CORNERS: [[f32; 2]; VERTICES_PER_STAR] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Star positions as one interleaved `x, y, z` buffer plus a single shared colour.
///
/// The buffer length is fixed at construction; updates only rewrite values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    positions: Vec<f32>,
    colour: u32,
    point_size: f32,
    dirty: bool,
}

impl ParticleField {
    /// Sample `count` points with every coordinate uniform in `[-extent, extent]`.
    pub fn generate<R: Rng>(count: usize, extent: f32, rng: &mut R) -> Self {
        let positions = (0..count * 3)
            .map(|_| rng.gen_range(-extent..=extent))
            .collect();
        Self::with_buffer(positions)
    }

    pub fn from_positions(positions: Vec<f32>) -> SceneResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(SceneError::MalformedPositionBuffer(positions.len()));
        }
        Ok(Self::with_buffer(positions))
    }

    fn with_buffer(positions: Vec<f32>) -> Self {
        Self {
            positions,
            colour: PARTICLE_BASE_COLOUR,
            point_size: PARTICLE_POINT_SIZE,
            dirty: true,
        }
    }

    /// Drop every star by one step and move the ones that fell through the
    /// floor back to the ceiling. X and Z never change.
    pub fn update(&mut self) {
        for y in self.positions.iter_mut().skip(1).step_by(3) {
            *y -= PARTICLE_FALL_STEP;
            if *y < PARTICLE_FLOOR {
                *y = PARTICLE_CEILING;
            }
        }
        self.dirty = true;
    }

    pub fn set_colour(&mut self, colour: u32) {
        self.colour = colour & MAX_RGB_COLOUR;
    }

    /// Whether the buffer changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn point(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(3)?;
        let xyz = self.positions.get(start..start.checked_add(3)?)?;
        Some([xyz[0], xyz[1], xyz[2]])
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// The buffer viewed as one `[x, y, z]` entry per point.
    pub fn vertices(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn colour(&self) -> u32 {
        self.colour
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }
}

#[derive(Component)]
pub struct StarField;

/// The live star field and the render assets it feeds.
#[derive(Resource)]
pub struct StarFieldState {
    pub field: ParticleField,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StarMaterial>,
    applied_colour: u32,
}

/// Star quad mesh kept in the main world so it can be rewritten every frame.
///
/// Every star contributes six vertices at its centre. The UV channel holds
/// the quad corner the star shader expands each vertex towards.
pub fn create_star_mesh(field: &ParticleField) -> Mesh {
    let positions: Vec<[f32; 3]> = field
        .vertices()
        .iter()
        .flat_map(|centre| [*centre; VERTICES_PER_STAR])
        .collect();
    let corners: Vec<[f32; 2]> = QUAD_CORNERS
        .iter()
        .copied()
        .cycle()
        .take(positions.len())
        .collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, corners)
}

pub fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StarMaterial>>,
    mut rng: ResMut<SceneRng>,
) {
    let field = ParticleField::generate(PARTICLE_COUNT, PARTICLE_EXTENT, &mut rng.0);

    let mesh = meshes.add(create_star_mesh(&field));
    let material = materials.add(StarMaterial::new(
        hex_colour(field.colour()),
        field.point_size(),
    ));

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(material.clone()),
        Transform::default(),
        StarField,
        NoFrustumCulling,
    ));

    info!(
        "Star field spawned with {} points (point size {})",
        field.point_count(),
        field.point_size()
    );

    commands.insert_resource(StarFieldState {
        applied_colour: field.colour(),
        field,
        mesh,
        material,
    });
}

pub fn advance_particles(mut star_field: ResMut<StarFieldState>) {
    star_field.field.update();
}

/// Re-upload the position buffer after it was mutated this frame.
pub fn upload_particle_buffer(
    mut star_field: ResMut<StarFieldState>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !star_field.field.take_dirty() {
        return;
    }

    let Some(mesh) = meshes.get_mut(&star_field.mesh) else {
        return;
    };

    if let Some(VertexAttributeValues::Float32x3(vertices)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for (quad, centre) in vertices
            .chunks_exact_mut(VERTICES_PER_STAR)
            .zip(star_field.field.vertices())
        {
            quad.fill(*centre);
        }
    }
}

pub fn sync_particle_colour(
    mut star_field: ResMut<StarFieldState>,
    mut materials: ResMut<Assets<StarMaterial>>,
) {
    let colour = star_field.field.colour();
    if colour == star_field.applied_colour {
        return;
    }

    if let Some(material) = materials.get_mut(&star_field.material) {
        material.set_colour(hex_colour(colour));
    }
    star_field.applied_colour = colour;
}
