//! Domain-specific assertion macros for emojisearch harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! labels of the records involved, not just their glyphs.

/// Assert that a result set contains exactly `expected` glyphs, in order.
///
/// ```rust
/// assert_glyphs!(results, ["🐱", "🐶"]);
/// ```
#[macro_export]
macro_rules! assert_glyphs {
    ($results:expr, $expected:expr) => {{
        let results: &[emojisearch::EmojiRecord] = &$results;
        let actual: Vec<&str> = results.iter().map(|r| r.glyph.as_str()).collect();
        let expected: Vec<&str> = $expected.iter().copied().collect();
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "result labels: {:?}",
            results.iter().map(|r| r.label.as_str()).collect::<Vec<_>>()
        );
    }};
}

/// Assert that no record in a result set matches any of `terms`.
#[macro_export]
macro_rules! assert_none_match {
    ($results:expr, $terms:expr) => {{
        let results: &[emojisearch::EmojiRecord] = &$results;
        for record in results {
            for term in $terms.iter() {
                let term: &str = term.as_ref();
                if emojisearch::search::matches(record, term) {
                    panic!(
                        "assert_none_match! failed: {} ({:?}) matches excluded term {:?}",
                        record.glyph, record.label, term
                    );
                }
            }
        }
    }};
}
