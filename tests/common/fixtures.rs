//! Static catalogs and terms used across harnesses.

use std::path::{Path, PathBuf};

/// Expression terms that, excluded from a `face` search, leave animal faces.
pub const EXPRESSION_TERMS: &[&str] = &["smile", "laugh", "grin", "upside-down"];

/// Animal faces in built-in catalog order.
pub const ANIMAL_FACES: &[&str] = &["🐱", "🐶", "🐭", "🐰", "🐻", "🐸"];

/// Fruit in built-in catalog order.
pub const FRUIT: &[&str] = &["🍎", "🍌", "🍇", "🍉", "🍓"];

/// Words that occur in the built-in catalog's labels and tags, plus a few
/// that do not. Drives the property tests.
pub const VOCABULARY: &[&str] = &[
    "face", "cat", "dog", "pet", "animal", "fruit", "food", "apple", "red", "smile", "laugh",
    "grin", "upside-down", "happy", "joy", "space", "heart", "party", "fire", "rain", "berry",
    "melon", "a", "e", "zebra", "xyz",
];

/// A two-record catalog in TOML.
pub const CATALOG_TOML: &str = r#"
[[emoji]]
glyph = "🌮"
label = "taco"
tags = ["food", "mexican"]

[[emoji]]
glyph = "🌯"
label = "burrito"
tags = ["food", "mexican", "wrap"]
"#;

/// A one-record catalog in JSON.
pub const CATALOG_JSON: &str =
    r#"{ "emoji": [ { "glyph": "🦀", "label": "crab", "tags": ["rust", "ferris"] } ] }"#;

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture must be writable");
    path
}
