//! Structured problem reports
//!
//! Both the parser and the resolver report problems as [Diagnostic] values
//! instead of aborting: a malformed statement or a dangling reference makes
//! that one statement unusable, never the whole scene. Consumers (CLI,
//! viewer) decide how to surface them.

use crate::sketch::ast::error::{ParseError, ResolveError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported problem, tied to the source line of the statement it came
/// from where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: Option<usize>,
    pub code: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            line: None,
            code: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Warning, message)
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Diagnostic::error(err.to_string())
            .with_line(err.line())
            .with_code(err.code())
    }
}

impl Diagnostic {
    /// Build a diagnostic from a resolution error, pointing at the source
    /// line of the command whose reference failed to bind.
    pub fn from_resolve(err: &ResolveError, line: usize) -> Self {
        Diagnostic::error(err.to_string())
            .with_line(line)
            .with_code(err.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("identifier 'A' is already declared")
            .with_line(2)
            .with_code("duplicate-identifier");
        assert_eq!(
            diag.to_string(),
            "error [duplicate-identifier]: identifier 'A' is already declared (line 2)"
        );
    }

    #[test]
    fn test_from_parse_error() {
        let err = ParseError::InvalidNumber {
            literal: "99999999999999999999".to_string(),
            line: 7,
        };
        let diag = Diagnostic::from(err);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.line, Some(7));
        assert_eq!(diag.code.as_deref(), Some("invalid-number"));
    }
}
