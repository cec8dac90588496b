//! Icon-font assembly for `Pictofont`.
//!
//! Takes an ordered icon catalog and produces, per layout policy, a
//! glyph table (outline + codepoint rows) and an SVG font-description
//! document. Binary container encoding (TTF/WOFF/…) lives behind the
//! [`FontEncoder`] trait — this crate owns the derivation graph, not
//! the byte formats.

pub mod catalog;
pub mod color;
pub mod document;
pub mod encode;
pub mod error;
pub mod glyph_table;
pub mod unicode;

pub use catalog::{load_catalog, IconRecord};
pub use color::{ColorEntry, ColorIndex};
pub use document::{render_font_document, FontInfo};
pub use encode::{encode_all, EncodeError, EncodedFonts, FontEncoder, FontFormat};
pub use error::FontBuildError;
pub use glyph_table::{build_glyph_table, Glyph, GlyphTable};
pub use unicode::{BuildOptions, Codepoint, CodepointAllocator, BASE_CODEPOINT};
