//! Test builders — ergonomic constructors for `EmojiRecord`, catalogs and
//! engines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use emojisearch::{Catalog, EmojiRecord, FilterEngine, SearchParams};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// EmojiBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`EmojiRecord`] test fixtures.
///
/// ```rust
/// let record = EmojiBuilder::new("🐱", "cat face")
///     .tag("cat")
///     .tag("pet")
///     .build();
/// ```
pub struct EmojiBuilder {
    glyph: String,
    label: String,
    tags: Vec<String>,
}

impl EmojiBuilder {
    pub fn new(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            label: label.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> EmojiRecord {
        EmojiRecord {
            glyph: self.glyph,
            label: self.label,
            tags: self.tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

/// Engine over the embedded default catalog.
pub fn builtin_engine() -> FilterEngine {
    FilterEngine::new(Arc::new(Catalog::builtin()))
}

/// Engine over an ad-hoc catalog.
pub fn engine_with(records: Vec<EmojiRecord>) -> FilterEngine {
    FilterEngine::new(Arc::new(Catalog::new(records).expect("test catalog must be valid")))
}

/// A four-record catalog small enough to reason about by hand.
pub fn tiny_catalog() -> Vec<EmojiRecord> {
    vec![
        EmojiBuilder::new("🐱", "cat face").tag("cat").tag("pet").build(),
        EmojiBuilder::new("🐶", "dog face").tag("dog").tag("pet").build(),
        EmojiBuilder::new("🍎", "red apple").tag("fruit").build(),
        EmojiBuilder::new("🚀", "rocket").tag("space").build(),
    ]
}

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

pub fn params(include: &[&str], exclude: &[&str]) -> SearchParams {
    SearchParams::new(include.iter().copied(), exclude.iter().copied())
}

/// Glyphs of `records`, in order.
pub fn glyphs(records: &[EmojiRecord]) -> Vec<&str> {
    records.iter().map(|r| r.glyph.as_str()).collect()
}
