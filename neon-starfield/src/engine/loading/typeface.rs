use std::collections::HashMap;

use bevy::prelude::*;
use constants::text::FALLBACK_GLYPH;
use serde::Deserialize;

use crate::engine::error::{SceneError, SceneResult};

/// Font in the typeface JSON format: glyph outlines as drawing commands in
/// font units, scaled by `size / resolution` at layout time.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypefaceFont {
    pub glyphs: HashMap<String, TypefaceGlyph>,
    #[serde(default)]
    pub family_name: String,
    pub resolution: f32,
    pub bounding_box: TypefaceBounds,
    #[serde(default)]
    pub underline_thickness: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypefaceBounds {
    pub y_min: f32,
    pub y_max: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypefaceGlyph {
    /// Horizontal advance in font units.
    pub ha: f32,
    /// Outline commands. Absent for blank glyphs such as space.
    #[serde(default)]
    pub o: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

/// One glyph's outline placed on the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    pub glyph: char,
    pub offset: Vec2,
    pub scale: f32,
    pub commands: Vec<OutlineCommand>,
}

impl GlyphOutline {
    /// Map a point from font units to text space.
    pub fn place(&self, point: Vec2) -> Vec2 {
        point * self.scale + self.offset
    }
}

impl TypefaceFont {
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let font: Self =
            serde_json::from_str(json).map_err(|err| SceneError::InvalidFont(err.to_string()))?;
        font.validate()?;
        Ok(font)
    }

    pub fn validate(&self) -> SceneResult<()> {
        if !(self.resolution > 0.0) {
            return Err(SceneError::InvalidFont(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        Ok(())
    }

    pub fn scale(&self, size: f32) -> f32 {
        size / self.resolution
    }

    pub fn line_height(&self, size: f32) -> f32 {
        (self.bounding_box.y_max - self.bounding_box.y_min + self.underline_thickness)
            * self.scale(size)
    }

    /// Look up a glyph, falling back to `?` when the font lacks it.
    pub fn glyph(&self, ch: char) -> Option<(char, &TypefaceGlyph)> {
        self.glyphs
            .get(ch.encode_utf8(&mut [0; 4]) as &str)
            .map(|glyph| (ch, glyph))
            .or_else(|| {
                self.glyphs
                    .get(FALLBACK_GLYPH.encode_utf8(&mut [0; 4]) as &str)
                    .map(|glyph| (FALLBACK_GLYPH, glyph))
            })
    }

    /// Lay `text` out left to right from the origin, one outline per inked glyph.
    pub fn layout(&self, text: &str, size: f32) -> SceneResult<Vec<GlyphOutline>> {
        self.validate()?;

        let scale = self.scale(size);
        let mut offset = Vec2::ZERO;
        let mut outlines = Vec::new();

        for ch in text.chars() {
            if ch == '\n' {
                offset.x = 0.0;
                offset.y -= self.line_height(size);
                continue;
            }

            let (resolved, glyph) = self.glyph(ch).ok_or(SceneError::MissingGlyph(ch))?;

            if let Some(outline) = &glyph.o {
                outlines.push(GlyphOutline {
                    glyph: resolved,
                    offset,
                    scale,
                    commands: parse_outline(resolved, outline)?,
                });
            }

            offset.x += glyph.ha * scale;
        }

        Ok(outlines)
    }
}

/// Parse a typeface outline string.
///
/// Curve commands list the end point before the control points:
/// `q x y cx cy` and `b x y c1x c1y c2x c2y`.
pub fn parse_outline(glyph: char, outline: &str) -> SceneResult<Vec<OutlineCommand>> {
    let mut tokens = outline.split_whitespace();
    let mut commands = Vec::new();

    while let Some(token) = tokens.next() {
        let command = match token {
            "m" => OutlineCommand::MoveTo(next_point(glyph, &mut tokens)?),
            "l" => OutlineCommand::LineTo(next_point(glyph, &mut tokens)?),
            "q" => {
                let to = next_point(glyph, &mut tokens)?;
                let ctrl = next_point(glyph, &mut tokens)?;
                OutlineCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = next_point(glyph, &mut tokens)?;
                let ctrl1 = next_point(glyph, &mut tokens)?;
                let ctrl2 = next_point(glyph, &mut tokens)?;
                OutlineCommand::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => OutlineCommand::Close,
            other => {
                return Err(SceneError::MalformedOutline {
                    glyph,
                    reason: format!("unknown command {other:?}"),
                });
            }
        };
        commands.push(command);
    }

    Ok(commands)
}

fn next_point<'a>(glyph: char, tokens: &mut impl Iterator<Item = &'a str>) -> SceneResult<Vec2> {
    let x = next_number(glyph, tokens)?;
    let y = next_number(glyph, tokens)?;
    Ok(Vec2::new(x, y))
}

fn next_number<'a>(glyph: char, tokens: &mut impl Iterator<Item = &'a str>) -> SceneResult<f32> {
    let token = tokens.next().ok_or_else(|| SceneError::MalformedOutline {
        glyph,
        reason: "outline ends in the middle of a command".to_string(),
    })?;

    token.parse().map_err(|_| SceneError::MalformedOutline {
        glyph,
        reason: format!("invalid coordinate {token:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_FONT: &str = include_str!("../../../tests/fixtures/block.typeface.json");

    fn block_font() -> TypefaceFont {
        TypefaceFont::from_json(BLOCK_FONT).unwrap()
    }

    #[test]
    fn reads_typeface_metadata() {
        let font = block_font();
        assert_eq!(font.family_name, "Block Fixture");
        assert_eq!(font.resolution, 1000.0);
        assert_eq!(font.glyphs.len(), 4);
        assert!((font.line_height(10.0) - 10.5).abs() < 1e-5);
    }

    #[test]
    fn curve_commands_take_end_point_first() {
        let commands = parse_outline('o', "m 1 2 q 3 4 5 6 b 7 8 9 10 11 12 z").unwrap();
        assert_eq!(
            commands,
            vec![
                OutlineCommand::MoveTo(Vec2::new(1.0, 2.0)),
                OutlineCommand::QuadTo {
                    ctrl: Vec2::new(5.0, 6.0),
                    to: Vec2::new(3.0, 4.0),
                },
                OutlineCommand::CubicTo {
                    ctrl1: Vec2::new(9.0, 10.0),
                    ctrl2: Vec2::new(11.0, 12.0),
                    to: Vec2::new(7.0, 8.0),
                },
                OutlineCommand::Close,
            ]
        );
    }

    #[test]
    fn truncated_outline_is_rejected() {
        let err = parse_outline('x', "m 1 2 l 3").unwrap_err();
        assert!(err.to_string().contains("middle of a command"));
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse_outline('x', "m 1 2 k 3 4").unwrap_err();
        assert!(matches!(err, SceneError::MalformedOutline { glyph: 'x', .. }));
    }

    #[test]
    fn missing_characters_fall_back_to_question_mark() {
        let font = block_font();
        let (resolved, glyph) = font.glyph('v').unwrap();
        assert_eq!(resolved, '?');
        assert_eq!(glyph.ha, 600.0);
    }

    #[test]
    fn layout_advances_by_glyph_width() {
        let font = block_font();
        let outlines = font.layout("A o", 10.0).unwrap();

        // The space has no outline but still advances the pen.
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0].offset, Vec2::ZERO);
        assert!((outlines[1].offset.x - 10.0).abs() < 1e-5);
        assert_eq!(outlines[1].place(Vec2::new(300.0, 0.0)), Vec2::new(13.0, 0.0));
    }

    #[test]
    fn newline_moves_down_one_line() {
        let font = block_font();
        let outlines = font.layout("A\nA", 10.0).unwrap();
        assert_eq!(outlines[1].offset, Vec2::new(0.0, -font.line_height(10.0)));
    }

    #[test]
    fn no_glyph_and_no_fallback_fails() {
        let mut font = block_font();
        font.glyphs.remove("?");
        let err = font.layout("Av", 10.0).unwrap_err();
        assert!(matches!(err, SceneError::MissingGlyph('v')));
    }

    #[test]
    fn zero_resolution_is_invalid() {
        let json = BLOCK_FONT.replace("\"resolution\": 1000", "\"resolution\": 0");
        assert!(matches!(
            TypefaceFont::from_json(&json),
            Err(SceneError::InvalidFont(_))
        ));
    }
}
