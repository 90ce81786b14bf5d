/// Errors raised while building scene resources.
///
/// None of these are fatal to the frame loop: callers log them and keep
/// rendering whatever part of the scene is still available.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("position buffer length {0} is not a multiple of 3")]
    MalformedPositionBuffer(usize),

    #[error("invalid typeface font: {0}")]
    InvalidFont(String),

    #[error("malformed outline for glyph {glyph:?}: {reason}")]
    MalformedOutline { glyph: char, reason: String },

    #[error("font has no glyph for {0:?} and no fallback glyph")]
    MissingGlyph(char),

    #[error("tessellation failed: {0}")]
    Tessellation(String),

    #[error("text {0:?} produced no geometry")]
    EmptyGeometry(String),

    #[error("invalid post-processing pass order: {0}")]
    InvalidPassOrder(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
