//! Layout-policy transform from the 24×24 icon box into font units.
//!
//! Two policies exist:
//! - **Regular** preserves the icon's aspect ratio: wider-than-tall
//!   outlines are first rescaled to full viewbox height, and the
//!   advance width is proportional to the normalized width.
//! - **Squared** forces a fixed advance of 1200 units regardless of
//!   shape, for toolbars and grids where a uniform footprint matters
//!   more than intrinsic proportions.
//!
//! Both end with the same vertical font transform: `translate(0, -24)`
//! then `scale(50, -50)`. Font coordinates have Y pointing **up**; SVG
//! has Y pointing **down**, hence the negative Y scale.

use kurbo::{Affine, BezPath};

use crate::bbox::path_bbox;
use crate::error::GeometryError;
use crate::path_data;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Height (and nominal width) of the source icon viewbox.
pub const VIEWBOX: f64 = 24.0;

/// Uniform scale from viewbox units to font units.
pub const FONT_SCALE: f64 = 50.0;

/// Advance width of a full-width glyph, in font units.
pub const FULL_ADVANCE: f64 = 1200.0;

/// Decimal digits kept in serialized coordinates.
pub const COORD_PRECISION: usize = 6;

// ---------------------------------------------------------------------------
// Layout policy
// ---------------------------------------------------------------------------

/// Glyph sizing strategy.
///
/// The transform formulas are policy-complete; a third policy would be
/// a design decision, not an extension point, so this enum is closed
/// and matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutPolicy {
    /// Aspect-preserving, proportional advance.
    Regular,
    /// Fixed 1200-unit advance.
    Squared,
}

impl LayoutPolicy {
    /// Every supported policy, in build order.
    pub const ALL: [Self; 2] = [Self::Regular, Self::Squared];

    /// The policy name as it appears in font ids and file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Squared => "Squared",
        }
    }
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// A glyph outline in font units, plus its advance width.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedGlyph {
    /// Serialized path data in font units.
    pub path_data: String,
    /// Horizontal advance in font units.
    pub advance: f64,
}

/// Transform raw 24×24 path data into font units under `policy`.
pub fn transform_path(d: &str, policy: LayoutPolicy) -> Result<TransformedGlyph, GeometryError> {
    let path = path_data::parse(d)?;
    match policy {
        LayoutPolicy::Regular => Ok(regular(path)),
        LayoutPolicy::Squared => Ok(TransformedGlyph {
            path_data: to_font_units(path),
            advance: FULL_ADVANCE,
        }),
    }
}

/// Aspect-preserving layout.
///
/// Wider-than-tall outlines are uniformly scaled by `24 / height` so
/// the bounding box becomes full height; the outline is then moved so
/// its minimum corner sits at the origin, and the advance is
/// `width / 24 × 1200`.
fn regular(path: BezPath) -> TransformedGlyph {
    let bb = path_bbox(&path);
    // A zero-height outline would make the rescale divide by zero;
    // leave it at native scale instead.
    let rescaled = if bb.width() > bb.height() && bb.height() > 0.0 {
        Affine::scale(VIEWBOX / bb.height()) * path
    } else {
        path
    };
    let bb = path_bbox(&rescaled);
    let reset = Affine::translate((-bb.min_x, -bb.min_y)) * rescaled;
    let width = path_bbox(&reset).width();
    TransformedGlyph {
        path_data: to_font_units(reset),
        advance: width / VIEWBOX * FULL_ADVANCE,
    }
}

/// Apply the vertical font transform and serialize.
fn to_font_units(path: BezPath) -> String {
    let t = Affine::scale_non_uniform(FONT_SCALE, -FONT_SCALE) * Affine::translate((0.0, -VIEWBOX));
    path_data::to_svg_with_precision(&(t * path), COORD_PRECISION)
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

    /// The full 24×24 square, the simplest full-cell icon.
    const SQUARE: &str = "M0 0H24V24H0Z";

    #[test]
    fn squared_advance_is_invariant() {
        for d in [SQUARE, "M0 0H12V24H0Z", "M3 7H9V11H3Z", "M0 0Q12 24 24 0Z"] {
            let glyph = transform_path(d, LayoutPolicy::Squared).unwrap();
            assert_eq!(glyph.advance, FULL_ADVANCE, "path: {d}");
        }
    }

    #[test]
    fn squared_square_outline() {
        let glyph = transform_path(SQUARE, LayoutPolicy::Squared).unwrap();
        // (0,0)→(0,1200), (24,0)→(1200,1200), (24,24)→(1200,0)
        assert_eq!(glyph.path_data, "M0 1200L1200 1200L1200 0L0 0Z");
    }

    #[test]
    fn regular_full_square_has_full_advance() {
        let glyph = transform_path(SQUARE, LayoutPolicy::Regular).unwrap();
        assert_eq!(glyph.advance, FULL_ADVANCE);
        assert_eq!(glyph.path_data, "M0 1200L1200 1200L1200 0L0 0Z");
    }

    #[test]
    fn regular_half_width_has_half_advance() {
        let glyph = transform_path("M0 0H12V24H0Z", LayoutPolicy::Regular).unwrap();
        assert_eq!(glyph.advance, 600.0);
    }

    #[test]
    fn regular_rescales_wide_outlines_to_full_height() {
        // 24×12 box: wider than tall, so it is scaled by 24/12 = 2 to
        // a 48×24 box and the advance becomes 48/24 × 1200 = 2400.
        let glyph = transform_path("M0 0H24V12H0Z", LayoutPolicy::Regular).unwrap();
        assert_eq!(glyph.advance, 2400.0);
        assert_eq!(glyph.path_data, "M0 1200L2400 1200L2400 0L0 0Z");
    }

    #[test]
    fn regular_leaves_tall_outlines_at_native_scale() {
        // 12×24 box: not wider than tall, no pre-scale.
        let glyph = transform_path("M0 0H12V24H0Z", LayoutPolicy::Regular).unwrap();
        assert_eq!(glyph.path_data, "M0 1200L600 1200L600 0L0 0Z");
    }

    #[test]
    fn regular_moves_outline_to_origin() {
        // A 12×12 square offset to (6,6): equal width and height, so
        // no pre-scale; the reset translate moves it to the origin.
        let glyph = transform_path("M6 6H18V18H6Z", LayoutPolicy::Regular).unwrap();
        assert_eq!(glyph.advance, 600.0);
        assert_eq!(glyph.path_data, "M0 1200L600 1200L600 600L0 600Z");
    }

    #[test]
    fn squared_does_not_move_outline() {
        // Squared applies only the vertical transform; the offset stays.
        let glyph = transform_path("M6 6H18V18H6Z", LayoutPolicy::Squared).unwrap();
        assert_eq!(glyph.path_data, "M300 900L900 900L900 300L300 300Z");
    }

    #[test]
    fn coordinates_round_to_six_digits() {
        let glyph = transform_path("M0.12345678 0H24V24H0.12345678Z", LayoutPolicy::Squared)
            .unwrap();
        // 0.12345678 × 50 = 6.172839
        assert!(
            glyph.path_data.contains("6.172839"),
            "got: {}",
            glyph.path_data
        );
    }

    #[test]
    fn invalid_path_is_rejected_under_both_policies() {
        for policy in LayoutPolicy::ALL {
            assert!(transform_path("Mx y", policy).is_err(), "policy: {policy:?}");
        }
    }

    #[test]
    fn zero_height_outline_does_not_divide_by_zero() {
        let glyph = transform_path("M0 12H24V12H0Z", LayoutPolicy::Regular).unwrap();
        assert!(glyph.advance.is_finite());
        assert_eq!(glyph.advance, FULL_ADVANCE);
    }

    #[test]
    fn policy_names() {
        assert_eq!(LayoutPolicy::Regular.name(), "Regular");
        assert_eq!(LayoutPolicy::Squared.name(), "Squared");
    }
}
