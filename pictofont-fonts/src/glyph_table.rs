//! Glyph table assembly.
//!
//! Walks the catalog in order, allocating codepoints and transforming
//! geometry under one layout policy. Codepoint collisions are checked
//! on every insertion — fail-fast, so the offending icon is identified
//! precisely rather than at the end of the build.

use std::collections::HashMap;

use pictofont_graphics::{transform_path, LayoutPolicy};

use crate::catalog::IconRecord;
use crate::error::FontBuildError;
use crate::unicode::{BuildOptions, Codepoint, CodepointAllocator};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of a glyph table.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub slug: String,
    /// Serialized path data in font units.
    pub path_data: String,
    /// Horizontal advance in font units.
    pub advance: f64,
    pub codepoint: Codepoint,
}

/// Ordered glyph rows for one layout policy.
///
/// Invariant: all codepoints in a table are pairwise distinct, enforced
/// by [`GlyphTable::insert`].
#[derive(Debug, Clone)]
pub struct GlyphTable {
    pub policy: LayoutPolicy,
    glyphs: Vec<Glyph>,
    used: HashMap<Codepoint, String>,
}

impl GlyphTable {
    /// An empty table for `policy`.
    #[must_use]
    pub fn new(policy: LayoutPolicy) -> Self {
        Self {
            policy,
            glyphs: Vec::new(),
            used: HashMap::new(),
        }
    }

    /// Append a glyph, rejecting codepoint collisions.
    pub fn insert(&mut self, glyph: Glyph) -> Result<(), FontBuildError> {
        if let Some(first) = self.used.get(&glyph.codepoint) {
            return Err(FontBuildError::DuplicateCodepoint {
                codepoint: glyph.codepoint,
                first: first.clone(),
                second: glyph.slug,
            });
        }
        self.used.insert(glyph.codepoint, glyph.slug.clone());
        self.glyphs.push(glyph);
        Ok(())
    }

    /// The glyph rows, in catalog order.
    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the glyph table for one policy.
///
/// Excluded icons reserve their slot when `options.preserve_slots` is
/// set, so differently-filtered builds keep codepoints stable for the
/// icons they share. A filter that matches nothing yields a valid,
/// empty table.
pub fn build_glyph_table(
    icons: &[IconRecord],
    policy: LayoutPolicy,
    options: &BuildOptions,
    allocator: &mut CodepointAllocator,
) -> Result<GlyphTable, FontBuildError> {
    let mut table = GlyphTable::new(policy);

    for icon in icons {
        if !options.includes(&icon.slug) {
            if options.preserve_slots {
                allocator.skip();
            }
            continue;
        }

        let codepoint = allocator.allocate();
        let outline = transform_path(&icon.source, policy).map_err(|source| {
            FontBuildError::Glyph {
                slug: icon.slug.clone(),
                source,
            }
        })?;
        table.insert(Glyph {
            slug: icon.slug.clone(),
            path_data: outline.path_data,
            advance: outline.advance,
            codepoint,
        })?;
    }

    Ok(table)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact float comparisons are intentional in tests"
)]
mod tests {
    use super::*;

    fn icon(slug: &str, hex: &str, path: &str) -> IconRecord {
        IconRecord {
            slug: slug.to_owned(),
            hex: hex.to_owned(),
            source: path.to_owned(),
        }
    }

    fn sample_icons() -> Vec<IconRecord> {
        vec![
            icon("a", "ff0000", "M0 0H24V24H0Z"),
            icon("b", "00ff00", "M0 0H12V24H0Z"),
        ]
    }

    #[test]
    fn unfiltered_build_assigns_sequential_codepoints() {
        let icons = sample_icons();
        let mut alloc = CodepointAllocator::new();
        let table = build_glyph_table(
            &icons,
            LayoutPolicy::Regular,
            &BuildOptions::default(),
            &mut alloc,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.glyphs()[0].slug, "a");
        assert_eq!(table.glyphs()[0].codepoint, Codepoint(0xEA01));
        assert_eq!(table.glyphs()[0].advance, 1200.0);
        assert_eq!(table.glyphs()[1].slug, "b");
        assert_eq!(table.glyphs()[1].codepoint, Codepoint(0xEA02));
        assert_eq!(table.glyphs()[1].advance, 600.0);
    }

    #[test]
    fn preserved_slots_keep_codepoints_stable() {
        let icons = sample_icons();
        let mut alloc = CodepointAllocator::new();
        let table = build_glyph_table(
            &icons,
            LayoutPolicy::Regular,
            &BuildOptions::with_filter_list("b"),
            &mut alloc,
        )
        .unwrap();

        // "a" is excluded but still consumed 0xEA01, so "b" keeps the
        // codepoint it has in an unfiltered build.
        assert_eq!(table.len(), 1);
        assert_eq!(table.glyphs()[0].slug, "b");
        assert_eq!(table.glyphs()[0].codepoint, Codepoint(0xEA02));
    }

    #[test]
    fn unpreserved_slots_are_reused() {
        let icons = sample_icons();
        let mut options = BuildOptions::with_filter_list("b");
        options.preserve_slots = false;
        let mut alloc = CodepointAllocator::new();
        let table =
            build_glyph_table(&icons, LayoutPolicy::Regular, &options, &mut alloc).unwrap();

        assert_eq!(table.glyphs()[0].codepoint, Codepoint(0xEA01));
    }

    #[test]
    fn filter_matching_nothing_yields_empty_table() {
        let icons = sample_icons();
        let mut alloc = CodepointAllocator::new();
        let table = build_glyph_table(
            &icons,
            LayoutPolicy::Regular,
            &BuildOptions::with_filter_list("nonexistent"),
            &mut alloc,
        )
        .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn squared_build_fixes_every_advance() {
        let icons = sample_icons();
        let mut alloc = CodepointAllocator::new();
        let table = build_glyph_table(
            &icons,
            LayoutPolicy::Squared,
            &BuildOptions::default(),
            &mut alloc,
        )
        .unwrap();
        for glyph in table.glyphs() {
            assert_eq!(glyph.advance, 1200.0, "slug: {}", glyph.slug);
        }
    }

    #[test]
    fn policy_runs_agree_on_codepoints() {
        let icons = sample_icons();
        let options = BuildOptions::default();
        let mut a1 = CodepointAllocator::new();
        let mut a2 = CodepointAllocator::new();
        let regular =
            build_glyph_table(&icons, LayoutPolicy::Regular, &options, &mut a1).unwrap();
        let squared =
            build_glyph_table(&icons, LayoutPolicy::Squared, &options, &mut a2).unwrap();

        for (r, s) in regular.glyphs().iter().zip(squared.glyphs()) {
            assert_eq!(r.codepoint, s.codepoint, "slug: {}", r.slug);
        }
    }

    #[test]
    fn bad_path_data_names_the_slug() {
        let icons = vec![icon("broken", "ff0000", "Mx y")];
        let mut alloc = CodepointAllocator::new();
        let err = build_glyph_table(
            &icons,
            LayoutPolicy::Regular,
            &BuildOptions::default(),
            &mut alloc,
        )
        .unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("broken"), "got: {msg}");
    }

    #[test]
    fn insert_rejects_codepoint_collision() {
        let mut table = GlyphTable::new(LayoutPolicy::Regular);
        let glyph = Glyph {
            slug: "first".to_owned(),
            path_data: "M0 0Z".to_owned(),
            advance: 1200.0,
            codepoint: Codepoint(0xEA01),
        };
        table.insert(glyph.clone()).unwrap();

        let err = table
            .insert(Glyph {
                slug: "second".to_owned(),
                ..glyph
            })
            .unwrap_err();
        match err {
            FontBuildError::DuplicateCodepoint {
                codepoint,
                first,
                second,
            } => {
                assert_eq!(codepoint, Codepoint(0xEA01));
                assert_eq!(first, "first");
                assert_eq!(second, "second");
            }
            other => panic!("expected DuplicateCodepoint, got {other:?}"),
        }
    }

    #[test]
    fn builds_are_deterministic() {
        let icons = sample_icons();
        let options = BuildOptions::default();
        let mut a1 = CodepointAllocator::new();
        let mut a2 = CodepointAllocator::new();
        let t1 = build_glyph_table(&icons, LayoutPolicy::Regular, &options, &mut a1).unwrap();
        let t2 = build_glyph_table(&icons, LayoutPolicy::Regular, &options, &mut a2).unwrap();
        assert_eq!(t1.glyphs(), t2.glyphs());
    }
}
