//! Search layer — include/exclude filtering over the catalog.
//!
//! A term matches a record when the lower-cased term is a substring of the
//! record's label, or equals one of its tags. Blank terms never match.
//!
//! For every record, in catalog order:
//!
//! 1. any matching exclude term drops the record, without looking at the
//!    include terms;
//! 2. otherwise the record is appended once for *each* include term it
//!    matches.
//!
//! Step 2 means a record matching two include terms appears twice in the
//! output of [`FilterEngine::search`]. [`FilterEngine::search_distinct`]
//! stops at the first matching include term, so each catalog entry appears
//! at most once.

use crate::{catalog::Catalog, types::EmojiRecord, SearchParams};
use std::sync::Arc;

/// Stateless filter over a shared, read-only [`Catalog`].
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Arc<Catalog>,
}

impl FilterEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Records matching `params`, one copy per satisfied include term.
    pub fn search(&self, params: &SearchParams) -> Vec<EmojiRecord> {
        self.scan(params, false)
    }

    /// Like [`search`](Self::search) but each catalog entry appears at most
    /// once. Separate entries with identical contents are all kept.
    pub fn search_distinct(&self, params: &SearchParams) -> Vec<EmojiRecord> {
        self.scan(params, true)
    }

    /// Dispatch to [`search_distinct`](Self::search_distinct) or
    /// [`search`](Self::search). Transports call this with the
    /// `search.distinct` setting.
    pub fn run(&self, params: &SearchParams, distinct: bool) -> Vec<EmojiRecord> {
        if distinct {
            self.search_distinct(params)
        } else {
            self.search(params)
        }
    }
}

/// Whether `term` matches `record`, ignoring the case of `term`.
///
/// Whitespace-only terms count as blank and never match, even though `" "` is
/// a substring of most labels.
pub fn matches(record: &EmojiRecord, term: &str) -> bool {
    if is_blank(term) {
        return false;
    }
    term_matches(record, &term.to_lowercase())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

impl FilterEngine {
    /// With `distinct`, a record is pushed for its first matching include
    /// term only.
    fn scan(&self, params: &SearchParams, distinct: bool) -> Vec<EmojiRecord> {
        let include = normalise_terms(&params.include);
        let exclude = normalise_terms(&params.exclude);

        let mut results = Vec::new();
        if !include.is_empty() {
            for record in self.catalog.iter() {
                if exclude.iter().any(|term| term_matches(record, term)) {
                    continue;
                }
                for term in &include {
                    if term_matches(record, term) {
                        results.push(record.clone());
                        if distinct {
                            break;
                        }
                    }
                }
            }
        }

        tracing::debug!(
            include = ?params.include,
            exclude = ?params.exclude,
            distinct,
            matched = results.len(),
            "search"
        );
        results
    }
}

/// `term` must already be lower-case and non-blank.
fn term_matches(record: &EmojiRecord, term: &str) -> bool {
    record.label.contains(term) || record.has_tag(term)
}

fn normalise_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| !is_blank(t))
        .map(|t| t.to_lowercase())
        .collect()
}

fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
