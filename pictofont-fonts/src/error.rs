//! Build errors for font assembly.

use std::fmt;

use pictofont_graphics::GeometryError;

use crate::unicode::Codepoint;

/// Errors that abort a font build.
///
/// There is no partial-success mode: a policy's build either produces a
/// complete, internally consistent glyph table or fails entirely.
#[derive(Debug)]
pub enum FontBuildError {
    /// Two included icons were assigned the same codepoint. This can
    /// only happen through allocator misuse (a non-monotonic restart)
    /// and must never be tolerated silently — it would corrupt the
    /// font's symbol table.
    DuplicateCodepoint {
        codepoint: Codepoint,
        first: String,
        second: String,
    },
    /// An icon's path data could not be transformed.
    Glyph {
        slug: String,
        source: GeometryError,
    },
    /// The catalog could not be parsed or failed validation.
    Catalog(String),
}

impl fmt::Display for FontBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCodepoint {
                codepoint,
                first,
                second,
            } => write!(
                f,
                "duplicate codepoint {codepoint}: assigned to both '{first}' and '{second}'"
            ),
            Self::Glyph { slug, source } => write!(f, "glyph '{slug}': {source}"),
            Self::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl std::error::Error for FontBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Glyph { source, .. } => Some(source),
            _ => None,
        }
    }
}
