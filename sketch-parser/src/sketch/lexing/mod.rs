//! Lexer
//!
//!     This module turns source text into per-statement token lists. Lexing
//!     happens in two steps:
//!
//!         1. Base tokenization with the logos lexer. See [tokenize]. Tokens
//!            carry the byte range of their source text for diagnostics and
//!            tooling; nothing downstream may alter these ranges.
//!
//!         2. Statement splitting. See [split_statements]. Tokens are grouped
//!            into statements at sentence boundaries (newline or period),
//!            dropping whitespace. Each statement remembers its 1-based
//!            source line so the parser and resolver can point at it.
//!
//!     Lexing is deliberately permissive: an unrecognized character becomes a
//!     punctuation token, and statements are only validated by the parser.
//!     This keeps the lexer stateless - there is no lexing failure mode.

use crate::sketch::token::Token;
use logos::Logos;
use std::ops::Range;

/// Preprocesses source text to ensure it ends with a newline.
///
/// This guarantees the final statement is terminated even when the file does
/// not end with a newline or period. Returns the original string if it
/// already ends with a newline, or is empty.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Tokenize source code with location information.
///
/// Performs raw tokenization using the logos lexer, returning tokens paired
/// with their byte ranges. Tokens logos cannot classify are skipped; with the
/// punctuation catch-all in place this only happens for invalid input the
/// parser could never use anyway.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// One statement: its tokens (whitespace and terminators removed) and the
/// 1-based source line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub tokens: Vec<(Token, Range<usize>)>,
    pub line: usize,
}

/// Group a token stream into statements at sentence boundaries.
///
/// A newline or a period ends the current statement. Whitespace tokens are
/// dropped; empty statements (blank lines, doubled periods) produce nothing.
pub fn split_statements(tokens: Vec<(Token, Range<usize>)>) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current: Vec<(Token, Range<usize>)> = Vec::new();
    let mut line = 1usize;
    let mut current_line = 1usize;

    for (token, span) in tokens {
        match token {
            Token::Newline | Token::Period => {
                if !current.is_empty() {
                    statements.push(Statement {
                        tokens: std::mem::take(&mut current),
                        line: current_line,
                    });
                }
                if token == Token::Newline {
                    line += 1;
                }
            }
            Token::Whitespace => {}
            other => {
                if current.is_empty() {
                    current_line = line;
                }
                current.push((other, span));
            }
        }
    }

    if !current.is_empty() {
        statements.push(Statement {
            tokens: current,
            line: current_line,
        });
    }

    statements
}

/// Tokenize and split in one call. This is the lexer's entry point for the
/// parsing pipeline.
pub fn lex(source: &str) -> Vec<Statement> {
    let source = ensure_source_ends_with_newline(source);
    split_statements(tokenize(&source))
}
