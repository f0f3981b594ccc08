//! Interactive viewer for sketch scenes
//!
//! Module layout mirrors the responsibilities:
//! - model: pure application state (scene, selection)
//! - canvasviewer / programviewer: the two UI panels
//! - ui: layout and frame rendering
//! - app: state + panels + focus, key dispatch
//! - viewer: the Viewer trait, events, and the terminal run loop

pub mod app;
pub mod canvasviewer;
pub mod model;
pub mod programviewer;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;

#[cfg(test)]
mod tests;
