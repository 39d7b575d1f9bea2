//! Core types for emojisearch-core.
//!
//! [`EmojiRecord`] is a single catalog entry; [`SearchParams`] is the
//! per-request filter decoded by a transport and handed to the engine.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the emoji catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// The emoji itself. Opaque display value.
    pub glyph: String,
    /// Lowercase human-readable description, e.g. `"cat face"`.
    pub label: String,
    /// Lowercase keywords. Matched exactly, never by substring.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EmojiRecord {
    pub fn new<T, S>(glyph: impl Into<String>, label: impl Into<String>, tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glyph: glyph.into(),
            label: label.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `tag` is one of this record's tags (exact comparison).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl std::fmt::Display for EmojiRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph, self.label)
    }
}

/// Include/exclude terms for a single search.
///
/// Both lists are optional on the wire; a missing or `null` field decodes as
/// an empty list. Terms are free text and are lower-cased by the engine before
/// comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub include: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exclude: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchParams {
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Params with only include terms.
    pub fn including<I, S>(include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(include, std::iter::empty::<String>())
    }
}
