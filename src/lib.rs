//! emojisearch — emoji catalog search.
//!
//! The filter engine and catalog live in [`emojisearch_core`]; the HTTP
//! adapter lives in [`emojisearch_http`]. This crate adds the command-line
//! adapter and re-exports the pieces integration tests and benches need.
//!
//! # Architecture
//!
//! ```text
//! CLI ──┐
//!       ├──► SearchParams ──► FilterEngine ──► Vec<EmojiRecord>
//! HTTP ─┘                          │
//!                            Arc<Catalog>
//! ```

pub mod cli;

pub use emojisearch_core::{
    catalog::{Catalog, CatalogError},
    config::Config,
    search::{self, FilterEngine},
    types::{EmojiRecord, SearchParams},
};
