//! Domain-specific assertion macros for notename harnesses.
//!
//! These add context to failures: the rendered pattern and the filename that
//! was (or was not) matched.

/// Assert that a compiled pattern matches a filename.
///
/// ```rust
/// assert_matches_name!(re, "20240115T090500--plan__work.org");
/// ```
#[macro_export]
macro_rules! assert_matches_name {
    ($re:expr, $name:expr) => {{
        let re: &regex::Regex = &$re;
        let name: &str = $name;
        if !re.is_match(name) {
            panic!(
                "assert_matches_name! failed:\n  pattern: {}\n  name:    {:?}",
                re.as_str(),
                name
            );
        }
    }};
}

/// Assert that a compiled pattern does not match a filename.
#[macro_export]
macro_rules! assert_rejects_name {
    ($re:expr, $name:expr) => {{
        let re: &regex::Regex = &$re;
        let name: &str = $name;
        if re.is_match(name) {
            panic!(
                "assert_rejects_name! failed:\n  pattern: {}\n  name:    {:?}",
                re.as_str(),
                name
            );
        }
    }};
}

/// Assert that a fragment is a sequence with exactly `n` wildcard separators
/// as direct children.
pub fn assert_separators(fragment: &notename::PatternFragment, n: usize) {
    assert_eq!(
        fragment.separator_count(),
        n,
        "wrong number of separators in {fragment:#?}"
    );
}
