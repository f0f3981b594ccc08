//! Error types for parsing and resolution

use std::fmt;

/// Errors detected while parsing a single statement. None of these abort the
/// program parse: the offending statement is skipped and reported as a
/// diagnostic, and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The statement does not begin with a statement keyword.
    UnknownKeyword { word: String, line: usize },
    /// The statement's arguments do not fit any shape for its keyword.
    MalformedStatement {
        keyword: &'static str,
        expected: &'static str,
        found: String,
        line: usize,
    },
    /// A numeric argument does not fit an i64.
    InvalidNumber { literal: String, line: usize },
    /// The statement redeclares an identifier.
    DuplicateIdentifier { name: String, line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownKeyword { line, .. }
            | ParseError::MalformedStatement { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::DuplicateIdentifier { line, .. } => *line,
        }
    }

    /// Stable diagnostic code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnknownKeyword { .. } => "unknown-keyword",
            ParseError::MalformedStatement { .. } => "malformed-statement",
            ParseError::InvalidNumber { .. } => "invalid-number",
            ParseError::DuplicateIdentifier { .. } => "duplicate-identifier",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownKeyword { word, .. } => {
                write!(
                    f,
                    "'{}' is not a statement keyword (expected point, circle, chord, segment or radius)",
                    word
                )
            }
            ParseError::MalformedStatement {
                keyword,
                expected,
                found,
                ..
            } => {
                write!(
                    f,
                    "malformed {} statement: expected {}, found {}",
                    keyword, expected, found
                )
            }
            ParseError::InvalidNumber { literal, .. } => {
                write!(f, "'{}' is not a valid integer", literal)
            }
            ParseError::DuplicateIdentifier { name, .. } => {
                write!(f, "identifier '{}' is already declared", name)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors detected while binding a symbolic reference. These mark the
/// affected command as not drawable; the rest of the scene is unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The referenced identifier is declared nowhere in the program.
    UnresolvedReference { name: String },
    /// Following a circle's center references loops back on itself.
    CyclicReference { name: String, chain: Vec<String> },
}

impl ResolveError {
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::UnresolvedReference { .. } => "unresolved-reference",
            ResolveError::CyclicReference { .. } => "cyclic-reference",
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnresolvedReference { name } => {
                write!(f, "reference '{}' is never declared", name)
            }
            ResolveError::CyclicReference { name, chain } => {
                write!(
                    f,
                    "center reference '{}' is cyclic ({} -> {})",
                    name,
                    chain.join(" -> "),
                    name
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::DuplicateIdentifier {
            name: "A".to_string(),
            line: 3,
        };
        assert_eq!(err.to_string(), "identifier 'A' is already declared");
        assert_eq!(err.code(), "duplicate-identifier");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::CyclicReference {
            name: "C".to_string(),
            chain: vec!["C".to_string()],
        };
        assert_eq!(err.to_string(), "center reference 'C' is cyclic (C -> C)");
        assert_eq!(err.code(), "cyclic-reference");
    }
}
