//! Geometry errors.

use std::fmt;

/// Errors produced while parsing or transforming path data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The SVG path data could not be parsed.
    InvalidPath(String),
    /// The path parsed but contains no drawable segments.
    EmptyPath,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath(msg) => write!(f, "invalid path data: {msg}"),
            Self::EmptyPath => write!(f, "path has no drawable segments"),
        }
    }
}

impl std::error::Error for GeometryError {}
