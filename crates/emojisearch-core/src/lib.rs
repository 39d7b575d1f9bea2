//! emojisearch-core — emoji catalog and filter engine.
//!
//! This crate holds everything a transport needs to answer a search: the
//! record types, the read-only [`Catalog`], the [`FilterEngine`] that scans
//! it, and the layered [`config::Config`].
//!
//! # Architecture
//!
//! ```text
//! transport (HTTP / CLI) ──► SearchParams ──► FilterEngine ──► Vec<EmojiRecord>
//!                                                  │
//!                                            Arc<Catalog>
//! ```
//!
//! The engine never mutates the catalog, so a single engine can be cloned
//! into as many request handlers as needed.

pub mod catalog;
pub mod config;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use search::FilterEngine;
pub use types::{EmojiRecord, SearchParams};
