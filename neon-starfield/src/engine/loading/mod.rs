//! Font loading and text mesh construction.
//!
//! The typeface font is requested from the asset server at startup and
//! polled every frame until it resolves. Text geometry is built once from
//! the loaded outlines.

/// Typeface JSON font asset, outline parsing and glyph layout.
pub mod typeface;

/// Extruded text meshes tessellated from glyph outlines.
pub mod text_geometry;

/// Non-blocking font request and its one-shot resolution into a text entity.
pub mod font_request;
