//! Pure geometry for the icon-font pipeline.
//!
//! Icons arrive as SVG path data in a 24×24 viewbox and leave as
//! font-unit outlines. Everything in this crate is a pure function over
//! [`kurbo`] types; no I/O, no shared state.

pub mod bbox;
pub mod error;
pub mod path_data;
pub mod transform;

pub use bbox::{path_bbox, BoundingBox};
pub use error::GeometryError;
pub use transform::{transform_path, LayoutPolicy, TransformedGlyph};
