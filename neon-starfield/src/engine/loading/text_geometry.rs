use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use lyon::math::point;
use lyon::path::iterator::PathIterator;
use lyon::path::{Path, PathEvent};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

use super::typeface::{GlyphOutline, OutlineCommand, TypefaceFont};
use crate::engine::error::{SceneError, SceneResult};

/// Triangle soup for extruded text: back cap at `z = 0`, front cap at
/// `z = depth`, and side walls joining the two.
#[derive(Debug, Default, Clone)]
pub struct TextGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TextGeometry {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
            .with_inserted_indices(Indices::U32(self.indices))
    }

    fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.positions.push(position);
        self.normals.push(normal);
    }

    /// Add one flat cap. Triangles are wound counter-clockwise when seen
    /// from the side `normal_z` points to.
    fn add_cap(&mut self, cap: &VertexBuffers<[f32; 2], u32>, z: f32, normal_z: f32) {
        let base = self.next_index();
        for [x, y] in &cap.vertices {
            self.push_vertex([*x, *y, z], [0.0, 0.0, normal_z]);
        }

        for triangle in cap.indices.chunks_exact(3) {
            let (a, b, c) = (triangle[0], triangle[1], triangle[2]);
            let area = signed_area(
                cap.vertices[a as usize],
                cap.vertices[b as usize],
                cap.vertices[c as usize],
            );
            let ccw = area >= 0.0;
            if ccw == (normal_z > 0.0) {
                self.indices.extend([base + a, base + b, base + c]);
            } else {
                self.indices.extend([base + a, base + c, base + b]);
            }
        }
    }

    /// Add a quad standing on segment `from -> to`, spanning `0..depth`.
    /// The normal is the right-hand side of the segment unless `solid_clockwise`
    /// says the glyph's filled contours run clockwise.
    fn add_wall(&mut self, from: Vec2, to: Vec2, depth: f32, solid_clockwise: bool) {
        let direction = to - from;
        if direction.length_squared() <= f32::EPSILON {
            return;
        }
        let normal = if solid_clockwise {
            Vec2::new(-direction.y, direction.x).normalize()
        } else {
            Vec2::new(direction.y, -direction.x).normalize()
        };
        let normal = [normal.x, normal.y, 0.0];

        let base = self.next_index();
        self.push_vertex([from.x, from.y, 0.0], normal);
        self.push_vertex([to.x, to.y, 0.0], normal);
        self.push_vertex([to.x, to.y, depth], normal);
        self.push_vertex([from.x, from.y, depth], normal);

        self.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
}

/// Twice the signed area of a closed polygon; positive when counter-clockwise.
fn contour_area(points: &[Vec2]) -> f32 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum()
}

/// Flatten every sub-path of `path` into a closed polygon.
fn flatten_contours(path: &Path, tolerance: f32) -> Vec<Vec<Vec2>> {
    let mut contours = Vec::new();
    let mut current = Vec::new();

    for event in path.iter().flattened(tolerance) {
        match event {
            PathEvent::Begin { at } => {
                current.clear();
                current.push(Vec2::new(at.x, at.y));
            }
            PathEvent::Line { to, .. } => current.push(Vec2::new(to.x, to.y)),
            PathEvent::End { .. } => contours.push(std::mem::take(&mut current)),
            _ => {}
        }
    }

    contours
}

/// The largest contour of a glyph is solid; holes wind the other way.
fn solid_runs_clockwise(contours: &[Vec<Vec2>]) -> bool {
    contours
        .iter()
        .map(|contour| contour_area(contour))
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .is_some_and(|area| area < 0.0)
}

/// Convert one placed glyph outline into a closed lyon path in text units.
pub fn build_outline_path(outline: &GlyphOutline) -> SceneResult<Path> {
    let mut builder = Path::builder();
    let mut open = false;

    let to_point = |p: Vec2| {
        let placed = outline.place(p);
        point(placed.x, placed.y)
    };

    for command in &outline.commands {
        match *command {
            OutlineCommand::MoveTo(at) => {
                if open {
                    builder.end(true);
                }
                builder.begin(to_point(at));
                open = true;
            }
            OutlineCommand::Close => {
                if open {
                    builder.end(true);
                    open = false;
                }
            }
            _ if !open => {
                return Err(SceneError::MalformedOutline {
                    glyph: outline.glyph,
                    reason: "drawing command before any move".to_string(),
                });
            }
            OutlineCommand::LineTo(to) => {
                builder.line_to(to_point(to));
            }
            OutlineCommand::QuadTo { ctrl, to } => {
                builder.quadratic_bezier_to(to_point(ctrl), to_point(to));
            }
            OutlineCommand::CubicTo { ctrl1, ctrl2, to } => {
                builder.cubic_bezier_to(to_point(ctrl1), to_point(ctrl2), to_point(to));
            }
        }
    }

    // Typeface outlines usually omit the trailing `z`.
    if open {
        builder.end(true);
    }

    Ok(builder.build())
}

/// Tessellate and extrude every glyph outline into one geometry.
pub fn extrude_outlines(
    outlines: &[GlyphOutline],
    depth: f32,
    tolerance: f32,
) -> SceneResult<TextGeometry> {
    let mut geometry = TextGeometry::default();
    let mut tessellator = FillTessellator::new();
    let options = FillOptions::tolerance(tolerance).with_fill_rule(FillRule::NonZero);

    for outline in outlines {
        let path = build_outline_path(outline)?;

        let mut cap: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
        tessellator
            .tessellate_path(
                &path,
                &options,
                &mut BuffersBuilder::new(&mut cap, |vertex: FillVertex| {
                    vertex.position().to_array()
                }),
            )
            .map_err(|err| {
                SceneError::Tessellation(format!("glyph {:?}: {err:?}", outline.glyph))
            })?;

        geometry.add_cap(&cap, depth, 1.0);
        geometry.add_cap(&cap, 0.0, -1.0);

        let contours = flatten_contours(&path, tolerance);
        let clockwise = solid_runs_clockwise(&contours);
        for contour in &contours {
            for (from, to) in contour.iter().zip(contour.iter().cycle().skip(1)) {
                geometry.add_wall(*from, *to, depth, clockwise);
            }
        }
    }

    Ok(geometry)
}

/// Lay out `text` with `font` and build the extruded mesh for it.
pub fn build_text_mesh(
    font: &TypefaceFont,
    text: &str,
    size: f32,
    depth: f32,
    tolerance: f32,
) -> SceneResult<Mesh> {
    let outlines = font.layout(text, size)?;
    let geometry = extrude_outlines(&outlines, depth, tolerance)?;

    if geometry.is_empty() {
        return Err(SceneError::EmptyGeometry(text.to_string()));
    }

    debug!(
        "Built text mesh for {text:?}: {} glyphs, {} triangles",
        outlines.len(),
        geometry.triangle_count()
    );

    Ok(geometry.into_mesh())
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::text::TEXT_CONTENT;

    const BLOCK_FONT: &str = include_str!("../../../tests/fixtures/block.typeface.json");
    const BUNDLED_FONT: &str = include_str!("../../../assets/fonts/neon_block.typeface.json");

    fn block_font() -> TypefaceFont {
        TypefaceFont::from_json(BLOCK_FONT).unwrap()
    }

    fn extrude(text: &str) -> TextGeometry {
        let font = block_font();
        let outlines = font.layout(text, 10.0).unwrap();
        extrude_outlines(&outlines, 2.0, 0.02).unwrap()
    }

    fn front_cap_area(geometry: &TextGeometry) -> f32 {
        geometry
            .indices
            .chunks_exact(3)
            .filter(|tri| {
                tri.iter()
                    .all(|&i| geometry.normals[i as usize] == [0.0, 0.0, 1.0])
            })
            .map(|tri| {
                let [a, b, c] = [0, 1, 2].map(|k| {
                    let p = geometry.positions[tri[k] as usize];
                    [p[0], p[1]]
                });
                signed_area(a, b, c) * 0.5
            })
            .sum()
    }

    #[test]
    fn vertices_lie_on_the_two_caps() {
        let geometry = extrude("Ao");
        assert!(!geometry.is_empty());
        assert!(
            geometry
                .positions
                .iter()
                .all(|p| p[2] == 0.0 || p[2] == 2.0)
        );
        assert_eq!(geometry.positions.len(), geometry.normals.len());
    }

    #[test]
    fn indices_stay_in_bounds() {
        let geometry = extrude("A o?");
        let count = geometry.positions.len() as u32;
        assert_eq!(geometry.indices.len() % 3, 0);
        assert!(geometry.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn front_cap_is_wound_towards_the_viewer_and_keeps_holes() {
        let geometry = extrude("A");
        // Triangle 6 x 7 minus the 2 x 2 counter, in text units.
        let expected = 0.5 * 6.0 * 7.0 - 0.5 * 2.0 * 2.0;
        assert!((front_cap_area(&geometry) - expected).abs() < 1e-3);
    }

    #[test]
    fn walls_face_outwards() {
        let geometry = extrude("?");
        // Bottom edge of the square runs left to right, so its wall faces -Y.
        assert!(geometry.normals.contains(&[0.0, -1.0, 0.0]));
        assert!(geometry.normals.contains(&[1.0, 0.0, 0.0]));
    }

    /// Whether outer-ring walls face away from `centre` and walls within
    /// `inner_radius` of it face towards it.
    fn wall_normals_by_ring(
        geometry: &TextGeometry,
        centre: Vec2,
        inner_radius: f32,
    ) -> (bool, bool) {
        let mut outer_outwards = true;
        let mut inner_towards_centre = true;
        for (position, normal) in geometry.positions.iter().zip(&geometry.normals) {
            if normal[2] != 0.0 {
                continue;
            }
            let offset = Vec2::new(position[0], position[1]) - centre;
            let facing = Vec2::new(normal[0], normal[1]).dot(offset);
            if offset.abs().max_element() <= inner_radius {
                inner_towards_centre &= facing < 0.0;
            } else {
                outer_outwards &= facing > 0.0;
            }
        }
        (outer_outwards, inner_towards_centre)
    }

    fn square(min: f32, max: f32, clockwise: bool) -> Vec<OutlineCommand> {
        let mut corners = vec![
            Vec2::new(min, min),
            Vec2::new(max, min),
            Vec2::new(max, max),
            Vec2::new(min, max),
        ];
        if clockwise {
            corners.reverse();
        }
        let mut commands = vec![OutlineCommand::MoveTo(corners[0])];
        commands.extend(corners[1..].iter().map(|c| OutlineCommand::LineTo(*c)));
        commands.push(OutlineCommand::Close);
        commands
    }

    fn framed_square(outer_clockwise: bool) -> TextGeometry {
        let mut commands = square(0.0, 10.0, outer_clockwise);
        commands.extend(square(4.0, 6.0, !outer_clockwise));
        let outline = GlyphOutline {
            glyph: 'o',
            offset: Vec2::ZERO,
            scale: 1.0,
            commands,
        };
        extrude_outlines(&[outline], 2.0, 0.02).unwrap()
    }

    #[test]
    fn clockwise_outlines_still_face_outwards() {
        let geometry = framed_square(true);
        let (outer, inner) = wall_normals_by_ring(&geometry, Vec2::splat(5.0), 1.0);
        assert!(outer);
        assert!(inner);
        assert!(geometry.normals.contains(&[-1.0, 0.0, 0.0]));
    }

    #[test]
    fn counter_clockwise_outlines_face_outwards_with_holes() {
        let geometry = framed_square(false);
        let (outer, inner) = wall_normals_by_ring(&geometry, Vec2::splat(5.0), 1.0);
        assert!(outer);
        assert!(inner);
    }

    #[test]
    fn bundled_font_covers_the_scene_text() {
        let font = TypefaceFont::from_json(BUNDLED_FONT).unwrap();
        let glyphs: String = font
            .layout(TEXT_CONTENT, 10.0)
            .unwrap()
            .iter()
            .map(|outline| outline.glyph)
            .collect();
        assert_eq!(glyphs, TEXT_CONTENT);
        assert!(build_text_mesh(&font, TEXT_CONTENT, 10.0, 2.0, 0.02).is_ok());
    }

    #[test]
    fn bundled_font_walls_face_outwards() {
        let font = TypefaceFont::from_json(BUNDLED_FONT).unwrap();
        let outlines = font.layout("l", 10.0).unwrap();
        let geometry = extrude_outlines(&outlines, 2.0, 0.02).unwrap();

        // Stem spans x 0.8..1.8 and y 0..7.2 at this size.
        let (outer, _) = wall_normals_by_ring(&geometry, Vec2::new(1.3, 3.6), 0.0);
        assert!(outer);
        assert!(geometry.normals.contains(&[-1.0, 0.0, 0.0]));
    }

    #[test]
    fn curved_glyph_is_flattened_into_many_walls() {
        let square = extrude("?");
        let round = extrude("o");
        assert!(round.triangle_count() > square.triangle_count());
    }

    #[test]
    fn blank_text_has_no_geometry() {
        let font = block_font();
        let err = build_text_mesh(&font, "   ", 10.0, 2.0, 0.02).unwrap_err();
        assert!(matches!(err, SceneError::EmptyGeometry(_)));
    }

    #[test]
    fn missing_glyph_without_fallback_fails() {
        let mut font = block_font();
        font.glyphs.remove("?");
        let err = build_text_mesh(&font, "Alvaro", 10.0, 2.0, 0.02).unwrap_err();
        assert!(matches!(err, SceneError::MissingGlyph('l')));
    }

    #[test]
    fn line_before_move_is_rejected() {
        let outline = GlyphOutline {
            glyph: 'x',
            offset: Vec2::ZERO,
            scale: 1.0,
            commands: vec![OutlineCommand::LineTo(Vec2::ONE)],
        };
        assert!(matches!(
            build_outline_path(&outline),
            Err(SceneError::MalformedOutline { glyph: 'x', .. })
        ));
    }

    #[test]
    fn text_mesh_is_an_indexed_triangle_list() {
        let mesh = build_text_mesh(&block_font(), "Alvaro", 10.0, 2.0, 0.02).unwrap();
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
        assert!(mesh.indices().is_some_and(|indices| indices.len() > 0));
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
    }
}
