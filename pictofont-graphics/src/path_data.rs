//! SVG path data parsing and fixed-precision serialization.
//!
//! Parsing goes through [`kurbo::BezPath::from_svg`], which normalizes
//! all commands to absolute `M`/`L`/`Q`/`C`/`Z`. Serialization is done
//! by hand so that coordinates can be rounded to a fixed number of
//! decimal digits — byte-stable output matters more here than the
//! shortest possible encoding.

use kurbo::{BezPath, PathEl, Point};

use crate::error::GeometryError;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse SVG path data into a [`BezPath`].
///
/// A path that parses but draws nothing (e.g. a lone `M`) is rejected:
/// it has no outline and no meaningful bounding box.
pub fn parse(d: &str) -> Result<BezPath, GeometryError> {
    let path = BezPath::from_svg(d).map_err(|e| GeometryError::InvalidPath(e.to_string()))?;
    if path.segments().next().is_none() {
        return Err(GeometryError::EmptyPath);
    }
    Ok(path)
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Serialize a path to SVG path data with fixed decimal precision.
pub fn to_svg_with_precision(path: &BezPath, precision: usize) -> String {
    let mut d = String::with_capacity(path.elements().len() * 24);
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                d.push('M');
                write_point(&mut d, p, precision);
            }
            PathEl::LineTo(p) => {
                d.push('L');
                write_point(&mut d, p, precision);
            }
            PathEl::QuadTo(p1, p2) => {
                d.push('Q');
                write_point(&mut d, p1, precision);
                d.push(' ');
                write_point(&mut d, p2, precision);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                d.push('C');
                write_point(&mut d, p1, precision);
                d.push(' ');
                write_point(&mut d, p2, precision);
                d.push(' ');
                write_point(&mut d, p3, precision);
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn write_point(d: &mut String, p: Point, precision: usize) {
    d.push_str(&fmt_coord(p.x, precision));
    d.push(' ');
    d.push_str(&fmt_coord(p.y, precision));
}

/// Format a coordinate with the given precision, stripping trailing
/// zeros. Negative zero is normalized to zero.
#[must_use]
pub fn fmt_coord(v: f64, precision: usize) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_garbage() {
        let err = parse("not a path").unwrap_err();
        assert!(matches!(err, GeometryError::InvalidPath(_)), "got: {err:?}");
    }

    #[test]
    fn parse_rejects_move_only() {
        let err = parse("M5 5").unwrap_err();
        assert_eq!(err, GeometryError::EmptyPath);
    }

    #[test]
    fn parse_accepts_relative_commands() {
        let path = parse("m0 0h24v24h-24z").unwrap();
        assert!(path.segments().next().is_some());
    }

    #[test]
    fn serialize_square() {
        let path = parse("M0 0H24V24H0Z").unwrap();
        let d = to_svg_with_precision(&path, 6);
        assert_eq!(d, "M0 0L24 0L24 24L0 24Z");
    }

    #[test]
    fn serialize_rounds_to_precision() {
        let path = parse("M0.12345678 0L1 1").unwrap();
        let d = to_svg_with_precision(&path, 6);
        assert!(d.starts_with("M0.123457 0"), "got: {d}");
    }

    #[test]
    fn serialize_keeps_curves() {
        let path = parse("M0 0C1 2 3 4 5 6Q7 8 9 10").unwrap();
        let d = to_svg_with_precision(&path, 6);
        assert_eq!(d, "M0 0C1 2 3 4 5 6Q7 8 9 10");
    }

    #[test]
    fn fmt_coord_trims_trailing_zeros() {
        assert_eq!(fmt_coord(1.0, 6), "1");
        assert_eq!(fmt_coord(1.5, 6), "1.5");
        assert_eq!(fmt_coord(-2.25, 6), "-2.25");
        assert_eq!(fmt_coord(600.0, 6), "600");
    }

    #[test]
    fn fmt_coord_normalizes_negative_zero() {
        assert_eq!(fmt_coord(-0.0, 6), "0");
        assert_eq!(fmt_coord(-0.0000001, 6), "0");
    }
}
