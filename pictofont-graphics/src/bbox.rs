//! Axis-aligned bounding box computation for Bezier paths.

use kurbo::{BezPath, Shape};

// ---------------------------------------------------------------------------
// BoundingBox type
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// An empty (inverted) bounding box.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Check if this bounding box is valid (non-empty).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.is_valid() {
            self.max_x - self.min_x
        } else {
            0.0
        }
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.is_valid() {
            self.max_y - self.min_y
        } else {
            0.0
        }
    }

    /// Expand to include a rectangle given by two opposite corners.
    pub fn include_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.min_x = self.min_x.min(x0.min(x1));
        self.min_y = self.min_y.min(y0.min(y1));
        self.max_x = self.max_x.max(x0.max(x1));
        self.max_y = self.max_y.max(y0.max(y1));
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ---------------------------------------------------------------------------
// Bounding box computation
// ---------------------------------------------------------------------------

/// Compute the tight bounding box of a path.
///
/// Curve extrema are taken into account, so this is the exact bound of
/// the drawn outline, not the control-point hull. A path without
/// drawable segments yields [`BoundingBox::EMPTY`].
#[must_use]
pub fn path_bbox(path: &BezPath) -> BoundingBox {
    path.segments().fold(BoundingBox::EMPTY, |mut bb, seg| {
        let r = seg.bounding_box();
        bb.include_rect(r.x0, r.y0, r.x1, r.y1);
        bb
    })
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

    #[test]
    fn empty_bbox_is_invalid() {
        let bb = BoundingBox::EMPTY;
        assert!(!bb.is_valid());
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
    }

    #[test]
    fn include_rect_expands() {
        let mut bb = BoundingBox::EMPTY;
        bb.include_rect(1.0, 2.0, 5.0, 8.0);
        assert!(bb.is_valid());
        assert_eq!(bb.min_x, 1.0);
        assert_eq!(bb.min_y, 2.0);
        assert_eq!(bb.max_x, 5.0);
        assert_eq!(bb.max_y, 8.0);
        bb.include_rect(-1.0, 3.0, 2.0, 4.0);
        assert_eq!(bb.min_x, -1.0);
        assert_eq!(bb.max_x, 5.0);
    }

    #[test]
    fn square_path_bbox() {
        let path = BezPath::from_svg("M0 0H24V24H0Z").unwrap();
        let bb = path_bbox(&path);
        assert!(bb.is_valid());
        assert_eq!(bb.min_x, 0.0);
        assert_eq!(bb.min_y, 0.0);
        assert_eq!(bb.max_x, 24.0);
        assert_eq!(bb.max_y, 24.0);
    }

    #[test]
    fn offset_path_bbox() {
        let path = BezPath::from_svg("M6 3H18V21H6Z").unwrap();
        let bb = path_bbox(&path);
        assert_eq!(bb.min_x, 6.0);
        assert_eq!(bb.min_y, 3.0);
        assert_eq!(bb.width(), 12.0);
        assert_eq!(bb.height(), 18.0);
    }

    #[test]
    fn curve_extrema_are_included() {
        // A quadratic bulging above its endpoints: control at (12, 24)
        // puts the curve apex at y = 12, past the endpoint hull y = 0.
        let path = BezPath::from_svg("M0 0Q12 24 24 0").unwrap();
        let bb = path_bbox(&path);
        assert!(bb.max_y > 11.9 && bb.max_y < 12.1, "max_y: {}", bb.max_y);
    }

    #[test]
    fn move_only_path_is_empty() {
        let path = BezPath::from_svg("M5 5").unwrap();
        assert!(!path_bbox(&path).is_valid());
    }
}
