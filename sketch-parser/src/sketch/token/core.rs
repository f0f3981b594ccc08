//! Token definitions for the sketch format
//!
//! All tokens are defined with the logos derive macro. Keywords are matched
//! as explicit tokens so that the lexer already classifies words, as the
//! grammar requires; logos prefers the longest match, so `pointer` still
//! lexes as an identifier while `point` lexes as a keyword.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Recognized keywords.
///
/// Statement keywords open a statement and select the command kind. Marker
/// keywords (`at`, `from`, `to`, ...) are connective filler that lets the
/// input read as loose sentences ("circle C at P with 2"); the parser strips
/// them before matching the statement shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    Point,
    Circle,
    Chord,
    Segment,
    Radius,
    At,
    From,
    To,
    With,
    Center,
    Through,
    And,
}

impl Keyword {
    /// Whether this keyword can open a statement.
    pub fn is_statement_head(&self) -> bool {
        matches!(
            self,
            Keyword::Point | Keyword::Circle | Keyword::Chord | Keyword::Segment | Keyword::Radius
        )
    }

    /// Whether this keyword is connective filler, ignored by the parser.
    pub fn is_marker(&self) -> bool {
        !self.is_statement_head()
    }

    /// The keyword's source spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Point => "point",
            Keyword::Circle => "circle",
            Keyword::Chord => "chord",
            Keyword::Segment => "segment",
            Keyword::Radius => "radius",
            Keyword::At => "at",
            Keyword::From => "from",
            Keyword::To => "to",
            Keyword::With => "with",
            Keyword::Center => "center",
            Keyword::Through => "through",
            Keyword::And => "and",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All possible tokens in the sketch format
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    // Statement terminators: one statement per line or per sentence.
    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[token(".")]
    Period,

    // Whitespace between words (never significant)
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("point", |_| Keyword::Point)]
    #[token("circle", |_| Keyword::Circle)]
    #[token("chord", |_| Keyword::Chord)]
    #[token("segment", |_| Keyword::Segment)]
    #[token("radius", |_| Keyword::Radius)]
    #[token("at", |_| Keyword::At)]
    #[token("from", |_| Keyword::From)]
    #[token("to", |_| Keyword::To)]
    #[token("with", |_| Keyword::With)]
    #[token("center", |_| Keyword::Center)]
    #[token("through", |_| Keyword::Through)]
    #[token("and", |_| Keyword::And)]
    Keyword(Keyword),

    // Optionally signed integer literal. Kept as source text; the parser
    // converts to i64 and reports overflow as a syntax error.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    // Alphabetic-led alphanumeric run that is not a keyword
    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Catch-all for any other single character. The lexer is permissive;
    // stray punctuation is flagged by the parser, per statement.
    #[regex(r".", |lex| lex.slice().chars().next().unwrap(), priority = 0)]
    Punct(char),
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Whether this token ends a statement.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Token::Newline | Token::Period)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Keyword(_))
    }

    pub fn is_ident(&self) -> bool {
        matches!(self, Token::Ident(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

/// Display reproduces the token's source text, so joining a token stream
/// yields the original statement back (modulo collapsed whitespace).
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Newline => writeln!(f),
            Token::Period => write!(f, "."),
            Token::Whitespace => write!(f, " "),
            Token::Keyword(kw) => write!(f, "{}", kw),
            Token::Number(text) => write!(f, "{}", text),
            Token::Ident(text) => write!(f, "{}", text),
            Token::Punct(ch) => write!(f, "{}", ch),
        }
    }
}
