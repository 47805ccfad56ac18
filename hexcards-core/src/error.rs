//! Error types for card text parsing and rendering

use thiserror::Error;

/// Rejection of card text input. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: must have at least a title and a flavor text")]
    MalformedCardLine { line: usize },

    #[error("line {line}: invalid movement token \"{token}\"")]
    MalformedMovement { line: usize, token: String },

    #[error("line {line}: unknown direction in movement token \"{token}\"")]
    UnknownDirection { line: usize, token: String },

    #[error("distance must be 1 or 2, got {0}")]
    InvalidDistance(u8),
}

impl ParseError {
    /// Line the error was found on, if it came from text input
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedCardLine { line }
            | ParseError::MalformedMovement { line, .. }
            | ParseError::UnknownDirection { line, .. } => Some(*line),
            ParseError::InvalidDistance(_) => None,
        }
    }
}

/// Failure while turning a vector document into pixels
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rasterization requires the `raster` feature")]
    RasterUnsupported,

    #[error("cannot rasterize to a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("invalid SVG document: {0}")]
    InvalidSvg(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
