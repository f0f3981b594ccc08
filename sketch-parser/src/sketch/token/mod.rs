//! Token types shared across the lexer, parser, and tooling.
//!
//!     Sketch keeps the token set deliberately small: statements are short
//!     fixed-arity sentences, so four character classes (keyword, identifier,
//!     number, punctuation) plus the statement terminators cover the whole
//!     grammar. Anything the lexer does not recognize becomes a punctuation
//!     token and is dealt with by the parser ("maximal munge, defer
//!     validation") - the lexer itself is stateless and never fails.

pub mod core;

pub use core::{Keyword, Token};
