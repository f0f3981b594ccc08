//! Core modules for the sketch format.
//!
//! The module layout follows the pipeline order:
//!
//!     token    token definitions (logos) shared by lexer, parser and tooling
//!     lexing   tokenization and statement splitting
//!     parsing  statements -> commands + symbol table (+ diagnostics)
//!     ast      command model, symbol table, errors, diagnostics
//!     resolve  reference binding: commands -> drawables
//!     scene    renderer-facing view: drawables + bounds + serialization
//!     pipeline convenience orchestration of the above

pub mod ast;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod resolve;
pub mod scene;
pub mod token;
