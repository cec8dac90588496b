//! Slug → (codepoint, color) index for stylesheet generation.

use std::collections::HashMap;

use crate::catalog::IconRecord;
use crate::glyph_table::GlyphTable;
use crate::unicode::Codepoint;

/// One stylesheet-facing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub slug: String,
    pub codepoint: Codepoint,
    /// 6-digit hex color, without the leading `#`.
    pub hex: String,
}

/// Insertion-ordered slug → (codepoint, color) mapping.
///
/// Iteration order equals the glyph table's — and hence the catalog's —
/// order, so the stylesheet diffs stay reviewable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorIndex {
    pub entries: Vec<ColorEntry>,
}

impl ColorIndex {
    /// Pair each included glyph with its catalog color.
    ///
    /// Built once per full build, from the canonical policy's table;
    /// policies sharing the same allocation parameters produce
    /// identical codepoints, so any of them is a valid source.
    #[must_use]
    pub fn from_table(table: &GlyphTable, icons: &[IconRecord]) -> Self {
        let hex_by_slug: HashMap<&str, &str> = icons
            .iter()
            .map(|i| (i.slug.as_str(), i.hex.as_str()))
            .collect();

        let entries = table
            .glyphs()
            .iter()
            .map(|g| ColorEntry {
                slug: g.slug.clone(),
                codepoint: g.codepoint,
                hex: hex_by_slug
                    .get(g.slug.as_str())
                    .copied()
                    .unwrap_or_default()
                    .to_owned(),
            })
            .collect();
        Self { entries }
    }
}
