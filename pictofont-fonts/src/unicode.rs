//! Private-use-area codepoint allocation.
//!
//! Every candidate icon — included or not, depending on
//! [`BuildOptions::preserve_slots`] — consumes one slot of a single
//! monotonically increasing counter. The counter is owned state,
//! threaded explicitly: independent builds construct independent
//! allocators, so concurrent per-policy runs cannot interfere and
//! tests can pick their own base.

use std::collections::HashSet;
use std::fmt;

/// First private-use codepoint handed out.
pub const BASE_CODEPOINT: u32 = 0xEA01;

// ---------------------------------------------------------------------------
// Codepoint
// ---------------------------------------------------------------------------

/// A private-use-area Unicode scalar addressing one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub u32);

impl Codepoint {
    /// Numeric character reference, as used in SVG font documents
    /// (`&#xEA01;`).
    #[must_use]
    pub fn ncr(self) -> String {
        format!("&#x{:X};", self.0)
    }

    /// CSS escape sequence, as used in `content:` rules (`\ea01`).
    #[must_use]
    pub fn css_escape(self) -> String {
        format!("\\{:x}", self.0)
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Build options
// ---------------------------------------------------------------------------

/// Which icons a build includes, and whether excluded icons still
/// consume a codepoint slot.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Slugs to include; empty means include everything.
    pub filter: HashSet<String>,
    /// Advance the counter for excluded icons too, so re-running with a
    /// different filter keeps codepoints stable for common icons.
    pub preserve_slots: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            filter: HashSet::new(),
            preserve_slots: true,
        }
    }
}

impl BuildOptions {
    /// Build options from a comma-separated slug list; empty entries
    /// are dropped, so `""` means no filter.
    #[must_use]
    pub fn with_filter_list(list: &str) -> Self {
        Self {
            filter: list
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            ..Self::default()
        }
    }

    /// Whether an icon passes the filter.
    #[must_use]
    pub fn includes(&self, slug: &str) -> bool {
        self.filter.is_empty() || self.filter.contains(slug)
    }
}

// ---------------------------------------------------------------------------
// Allocator
// ---------------------------------------------------------------------------

/// Sequential codepoint allocator.
#[derive(Debug, Clone)]
pub struct CodepointAllocator {
    next: u32,
}

impl CodepointAllocator {
    /// Allocator starting at [`BASE_CODEPOINT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: BASE_CODEPOINT,
        }
    }

    /// Allocator starting at a custom base.
    #[must_use]
    pub const fn with_base(base: u32) -> Self {
        Self { next: base }
    }

    /// Assign the next codepoint and advance.
    pub fn allocate(&mut self) -> Codepoint {
        let cp = Codepoint(self.next);
        self.next += 1;
        cp
    }

    /// Reserve the next slot without assigning it (an excluded icon
    /// under `preserve_slots`).
    pub fn skip(&mut self) {
        self.next += 1;
    }
}

impl Default for CodepointAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
