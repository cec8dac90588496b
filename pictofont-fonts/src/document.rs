//! SVG font-description document rendering.
//!
//! The document is the interchange format `svg2ttf`-class encoders
//! consume: a `<font>` element holding one `<glyph>` per table row.
//! This is deliberately plain string templating — attribute values are
//! slugs, path data, and numeric character references, all of which
//! must land in the output byte-for-byte (an XML builder would escape
//! the `&#x…;` references).

use std::fmt::Write;

use pictofont_graphics::path_data::fmt_coord;
use pictofont_graphics::transform::COORD_PRECISION;

use crate::glyph_table::GlyphTable;

/// Units per em of the generated font (the height of a glyph cell and
/// the fixed advance of a squared glyph).
const UNITS_PER_EM: u32 = 1200;

/// Metadata stamped into the font document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    /// Font family base name; the policy name is appended to form the
    /// per-document font id.
    pub family: String,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            family: "Pictofont".to_owned(),
        }
    }
}

/// Render one glyph table into an SVG font document.
///
/// Output is deterministic: identical tables produce identical bytes.
#[must_use]
pub fn render_font_document(table: &GlyphTable, info: &FontInfo) -> String {
    let mut doc = String::with_capacity(384 + table.len() * 160);

    doc.push_str("<?xml version=\"1.0\" standalone=\"no\"?>\n");
    doc.push_str(
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
         \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
    );
    doc.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\">\n<defs>\n");
    let _ = writeln!(
        doc,
        "<font id=\"{}-{}\" horiz-adv-x=\"{UNITS_PER_EM}\">",
        info.family,
        table.policy.name()
    );
    let _ = writeln!(
        doc,
        "<font-face font-family=\"{}\" units-per-em=\"{UNITS_PER_EM}\" \
         ascent=\"{UNITS_PER_EM}\" descent=\"0\"/>",
        info.family
    );
    doc.push_str("<missing-glyph horiz-adv-x=\"0\"/>\n");

    for glyph in table.glyphs() {
        let _ = writeln!(
            doc,
            "<glyph glyph-name=\"{}\" unicode=\"{}\" d=\"{}\" horiz-adv-x=\"{}\"/>",
            glyph.slug,
            glyph.codepoint.ncr(),
            glyph.path_data,
            fmt_coord(glyph.advance, COORD_PRECISION)
        );
    }

    doc.push_str("</font>\n</defs>\n</svg>\n");
    doc
}
