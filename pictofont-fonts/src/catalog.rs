//! Icon catalog model and loading.
//!
//! The catalog is an ordered JSON array of icon records; order is
//! significant and drives codepoint allocation end-to-end. Records are
//! read once per build and never mutated.

use serde::Deserialize;

use crate::error::FontBuildError;

/// One icon: a stable slug, its brand color, and raw SVG path data in
/// a 24×24 viewbox.
///
/// Slug uniqueness is the catalog's contract; the slug doubles as the
/// CSS class fragment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconRecord {
    pub slug: String,
    /// 6-digit hex color, without the leading `#`.
    pub hex: String,
    /// SVG path data in the source viewbox.
    #[serde(rename = "path")]
    pub source: String,
}

/// Load an icon catalog from a JSON string.
///
/// Order is preserved. Each record's hex color is validated here so
/// that bad catalog data fails before any geometry work starts.
pub fn load_catalog(json: &str) -> Result<Vec<IconRecord>, FontBuildError> {
    let icons: Vec<IconRecord> =
        serde_json::from_str(json).map_err(|e| FontBuildError::Catalog(e.to_string()))?;
    for icon in &icons {
        validate_hex(icon)?;
    }
    Ok(icons)
}

fn validate_hex(icon: &IconRecord) -> Result<(), FontBuildError> {
    if icon.hex.len() != 6 || !icon.hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FontBuildError::Catalog(format!(
            "icon '{}': hex color '{}' is not 6 hex digits",
            icon.slug, icon.hex
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_records_in_order() {
        let json = r#"[
            {"slug": "a", "hex": "ff0000", "path": "M0 0H24V24H0Z"},
            {"slug": "b", "hex": "00ff00", "path": "M0 0H12V24H0Z"}
        ]"#;
        let icons = load_catalog(json).unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].slug, "a");
        assert_eq!(icons[1].slug, "b");
        assert_eq!(icons[0].hex, "ff0000");
        assert_eq!(icons[1].source, "M0 0H12V24H0Z");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = load_catalog("{not json").unwrap_err();
        assert!(matches!(err, FontBuildError::Catalog(_)), "got: {err:?}");
    }

    #[test]
    fn rejects_short_hex() {
        let json = r#"[{"slug": "a", "hex": "f00", "path": "M0 0H24V24H0Z"}]"#;
        let err = load_catalog(json).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("'a'"), "got: {msg}");
        assert!(msg.contains("f00"), "got: {msg}");
    }

    #[test]
    fn rejects_non_hex_digits() {
        let json = r#"[{"slug": "a", "hex": "gg0000", "path": "M0 0H24V24H0Z"}]"#;
        assert!(load_catalog(json).is_err());
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(load_catalog("[]").unwrap().is_empty());
    }
}
