//! Emoji catalog — the ordered, read-only set of records the engine scans.
//!
//! Catalogs are defined as files containing an `emoji` array of records. The
//! default catalog is embedded in the binary via [`include_str!`] so the
//! application works without any files on disk. Call [`Catalog::builtin`] at
//! startup, or [`Catalog::from_path`] for a user-supplied file, and share the
//! result behind an [`Arc`](std::sync::Arc).
//!
//! # Normalisation
//!
//! [`Catalog::new`] lower-cases labels and tags, trims surrounding whitespace,
//! drops empty and repeated tags, and rejects records with an empty glyph or
//! label. Once built, a catalog is never mutated.

use crate::types::EmojiRecord;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CATALOG_SRC: &str = include_str!("catalogs/default.toml");

/// Errors raised while building a [`Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to load catalog: {0}")]
    Load(#[from] config::ConfigError),
    #[error("catalog record {index} has an empty glyph")]
    EmptyGlyph { index: usize },
    #[error("catalog record {index} ({glyph}) has an empty label")]
    EmptyLabel { index: usize, glyph: String },
}

// ---------------------------------------------------------------------------
// Raw (serde) type, mirrors the file structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    emoji: Vec<EmojiRecord>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<EmojiRecord>,
}

impl Catalog {
    /// Validate and normalise `records`, preserving their order.
    pub fn new(records: Vec<EmojiRecord>) -> Result<Self, CatalogError> {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| normalise(index, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    /// Load and parse the embedded default catalog.
    pub fn builtin() -> Self {
        Self::from_toml_str(DEFAULT_CATALOG_SRC).expect("embedded default catalog must be valid")
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        Self::from_source(File::from_str(src, FileFormat::Toml))
    }

    /// Load a catalog file. The format (TOML, JSON, YAML) follows the file
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_source(File::from(path))?;
        tracing::debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn from_source<S>(source: S) -> Result<Self, CatalogError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let raw: RawCatalog = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Self::new(raw.emoji)
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmojiRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its glyph.
    pub fn get(&self, glyph: &str) -> Option<&EmojiRecord> {
        self.records.iter().find(|r| r.glyph == glyph)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EmojiRecord;
    type IntoIter = std::slice::Iter<'a, EmojiRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn normalise(index: usize, record: EmojiRecord) -> Result<EmojiRecord, CatalogError> {
    let glyph = record.glyph.trim().to_string();
    if glyph.is_empty() {
        return Err(CatalogError::EmptyGlyph { index });
    }

    let label = record.label.trim().to_lowercase();
    if label.is_empty() {
        return Err(CatalogError::EmptyLabel { index, glyph });
    }

    let mut tags: Vec<String> = Vec::with_capacity(record.tags.len());
    for tag in record.tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(EmojiRecord { glyph, label, tags })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
