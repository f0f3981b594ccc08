//! # sketch
//!
//! A parser and scene resolver for the sketch geometric construction format.
//!
//! A sketch program is a sequence of short statements, one per line (or per
//! `.`-terminated sentence), that name points and draw circles, chords,
//! segments and radii between them:
//!
//!     point A 3 4
//!     circle C A 2
//!     segment A C
//!
//! The pipeline is: lexing (statements of tokens) -> parsing (command list +
//! symbol table) -> resolution (symbolic references bound to concrete
//! coordinates). Rendering is left to consumers of [sketch::scene::Scene];
//! this library never assumes a drawing surface.
//!
//! Identifiers may be referenced before they are declared: the whole program
//! is parsed into a finite command list before any resolution is attempted,
//! so forward references are legal.

pub mod sketch;
