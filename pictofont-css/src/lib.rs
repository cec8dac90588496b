//! Stylesheet rendering for icon classes.
//!
//! Appends per-icon rules to an embedded base template: for each slug a
//! content rule binding its class to the glyph's codepoint, and a color
//! rule binding the "colored" variant class to the icon's hex color.
//! Rule order follows the color index's — and hence the catalog's —
//! order. Minification is someone else's job.

use std::fmt::Write;

use pictofont_fonts::ColorIndex;

/// Base stylesheet with `{family}` and `{prefix}` placeholders.
static BASE_TEMPLATE: &str = include_str!("../assets/base.css");

/// Options for stylesheet rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    /// Font family name referenced by the base rules.
    pub family: String,
    /// CSS class prefix: `pf` produces `.pf-slug` and `.pf--color`.
    pub prefix: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            family: "Pictofont".to_owned(),
            prefix: "pf".to_owned(),
        }
    }
}

/// Render the stylesheet for a color index.
#[must_use]
pub fn render_stylesheet(index: &ColorIndex, opts: &StyleOptions) -> String {
    let mut css = BASE_TEMPLATE
        .replace("{family}", &opts.family)
        .replace("{prefix}", &opts.prefix);

    for entry in &index.entries {
        let _ = write!(
            css,
            "\n.{p}-{slug}::before {{ content: \"{cp}\"; }}\n\
             .{p}-{slug}.{p}--color::before {{ color: #{hex}; }}",
            p = opts.prefix,
            slug = entry.slug,
            cp = entry.codepoint.css_escape(),
            hex = entry.hex,
        );
    }
    css.push('\n');
    css
}
