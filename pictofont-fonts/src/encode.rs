//! Binary font encoding seam.
//!
//! Byte-level container encoding is an external collaborator behind
//! the [`FontEncoder`] trait. The derivation graph, however, is fixed
//! and owned here: TTF is encoded from the SVG font document, WOFF /
//! WOFF2 / EOT each derive from TTF, and OTF derives from WOFF.

use std::fmt;

// ---------------------------------------------------------------------------
// Formats and the derivation graph
// ---------------------------------------------------------------------------

/// Binary font container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Ttf,
    Woff,
    Woff2,
    Eot,
    Otf,
}

impl FontFormat {
    /// Every format, in a valid encoding order (prerequisites first).
    pub const ALL: [Self; 5] = [Self::Ttf, Self::Woff, Self::Woff2, Self::Eot, Self::Otf];

    /// The format this one derives from. `None` for TTF, which is
    /// encoded directly from the font document.
    #[must_use]
    pub const fn derives_from(self) -> Option<Self> {
        match self {
            Self::Ttf => None,
            Self::Woff | Self::Woff2 | Self::Eot => Some(Self::Ttf),
            Self::Otf => Some(Self::Woff),
        }
    }

    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ttf => "ttf",
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
            Self::Eot => "eot",
            Self::Otf => "otf",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// ---------------------------------------------------------------------------
// Encoder trait
// ---------------------------------------------------------------------------

/// Errors surfaced by an encoder implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The encoder does not support the requested format.
    Unsupported(FontFormat),
    /// The encoder failed with a message of its own.
    Encoder(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(format) => write!(f, "unsupported font format: {format}"),
            Self::Encoder(msg) => write!(f, "encoder error: {msg}"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// External binary font encoder.
///
/// Implementations may shell out, link a native library, or stub the
/// formats out entirely; this crate only guarantees they are invoked
/// in dependency order with the right inputs.
pub trait FontEncoder {
    /// Encode the SVG font document to TTF.
    fn svg_to_ttf(&self, document: &str) -> Result<Vec<u8>, EncodeError>;

    /// Derive one container format from its prerequisite's bytes.
    fn derive(&self, target: FontFormat, source: &[u8]) -> Result<Vec<u8>, EncodeError>;
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// All encoded artifacts for one font document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedFonts {
    pub ttf: Vec<u8>,
    pub woff: Vec<u8>,
    pub woff2: Vec<u8>,
    pub eot: Vec<u8>,
    pub otf: Vec<u8>,
}

impl EncodedFonts {
    /// The bytes for one format.
    #[must_use]
    pub fn bytes(&self, format: FontFormat) -> &[u8] {
        match format {
            FontFormat::Ttf => &self.ttf,
            FontFormat::Woff => &self.woff,
            FontFormat::Woff2 => &self.woff2,
            FontFormat::Eot => &self.eot,
            FontFormat::Otf => &self.otf,
        }
    }
}

/// Run the full derivation graph over one font document.
///
/// Any failure aborts the run — a partially encoded format set is
/// never returned.
pub fn encode_all(encoder: &dyn FontEncoder, document: &str) -> Result<EncodedFonts, EncodeError> {
    let ttf = encoder.svg_to_ttf(document)?;
    let woff = encoder.derive(FontFormat::Woff, &ttf)?;
    let woff2 = encoder.derive(FontFormat::Woff2, &ttf)?;
    let eot = encoder.derive(FontFormat::Eot, &ttf)?;
    let otf = encoder.derive(FontFormat::Otf, &woff)?;
    Ok(EncodedFonts {
        ttf,
        woff,
        woff2,
        eot,
        otf,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
