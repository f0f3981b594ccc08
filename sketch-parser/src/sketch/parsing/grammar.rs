//! Grammar rule definitions
//!
//! The statement grammar is declarative: each statement's tokens are
//! rendered to a shape string (for example `point A 3 4` becomes
//! `<point><id><num><num>`) and matched against the rules below, in
//! declaration order. The rule name selects the command builder in
//! [super::parser].
//!
//! Statement shapes:
//!
//! 1. point          - declare a named point at integer coordinates
//! 2. circle_named_ref    - named circle, center by reference
//! 3. circle_ref          - anonymous circle, center by reference
//! 4. circle_named_inline - named circle, inline center coordinates
//! 5. circle_inline       - anonymous circle, inline center coordinates
//! 6. chord / segment / radius - a line between two references

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar rules as (name, shape regex) pairs, tried in declaration order.
pub(super) const GRAMMAR_PATTERNS: &[(&str, &str)] = &[
    ("point", r"^<point><id><num><num>$"),
    ("circle_named_ref", r"^<circle><id><id><num>$"),
    ("circle_ref", r"^<circle><id><num>$"),
    ("circle_named_inline", r"^<circle><id><num><num><num>$"),
    ("circle_inline", r"^<circle><num><num><num>$"),
    ("chord", r"^<chord><id><id>$"),
    ("segment", r"^<segment><id><id>$"),
    ("radius", r"^<radius><id><id>$"),
];

/// The compiled rule table. The patterns are static and known-good, so
/// compilation happens once, lazily.
pub(super) static COMPILED_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    GRAMMAR_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            let regex = Regex::new(pattern)
                .unwrap_or_else(|err| panic!("grammar pattern '{}' is invalid: {}", name, err));
            (*name, regex)
        })
        .collect()
});

/// Find the first rule whose shape regex matches the statement shape.
pub(super) fn match_shape(shape: &str) -> Option<&'static str> {
    COMPILED_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(shape))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(COMPILED_PATTERNS.len(), GRAMMAR_PATTERNS.len());
    }

    #[test]
    fn test_shape_matching() {
        assert_eq!(match_shape("<point><id><num><num>"), Some("point"));
        assert_eq!(match_shape("<circle><id><id><num>"), Some("circle_named_ref"));
        assert_eq!(match_shape("<circle><id><num>"), Some("circle_ref"));
        assert_eq!(
            match_shape("<circle><id><num><num><num>"),
            Some("circle_named_inline")
        );
        assert_eq!(match_shape("<circle><num><num><num>"), Some("circle_inline"));
        assert_eq!(match_shape("<chord><id><id>"), Some("chord"));
        assert_eq!(match_shape("<segment><id><id>"), Some("segment"));
        assert_eq!(match_shape("<radius><id><id>"), Some("radius"));
    }

    #[test]
    fn test_wrong_arity_matches_nothing() {
        assert_eq!(match_shape("<point><id><num>"), None);
        assert_eq!(match_shape("<chord><id>"), None);
        assert_eq!(match_shape("<segment><id><id><id>"), None);
        assert_eq!(match_shape("<circle><num>"), None);
    }
}
