//! Tests for the viewer model and key handling
//!
//! Rendering itself needs a terminal; these tests cover the pure parts:
//! model state, focus, selection events, and canvas view math.

use super::app::App;
use super::canvasviewer::CanvasViewer;
use super::model::{Focus, Model};
use super::programviewer::ProgramViewer;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sketch_parser::sketch::scene::Scene;

fn model_from(source: &str) -> Model {
    let config = sketch_config::load_defaults().expect("defaults load");
    Model::new(Scene::from_source(source), config)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_model_starts_with_first_command_selected() {
    let model = model_from("point A 0 0\npoint B 1 1\n");
    assert_eq!(model.selected(), Some(0));
    assert_eq!(model.command_count(), 2);
}

#[test]
fn test_empty_program_has_no_selection() {
    let model = model_from("");
    assert_eq!(model.selected(), None);
    assert!(model.selected_command().is_none());
    assert!(model.selected_drawable().is_none());
}

#[test]
fn test_select_ignores_out_of_range() {
    let mut model = model_from("point A 0 0\n");
    model.select(5);
    assert_eq!(model.selected(), Some(0));
    model.select(0);
    assert_eq!(model.selected(), Some(0));
}

#[test]
fn test_unresolved_commands_are_flagged() {
    let model = model_from("point A 0 0\nchord A Missing\n");
    assert!(!model.is_unresolved(0));
    assert!(model.is_unresolved(1));
}

#[test]
fn test_diagnostic_counts_respect_report_unresolved() {
    let mut model = model_from("chord A Missing\n");
    let (errors, _) = model.diagnostic_counts();
    assert!(errors >= 1);

    model.config.resolve.report_unresolved = false;
    let (errors, warnings) = model.diagnostic_counts();
    assert_eq!((errors, warnings), (0, 0));
}

#[test]
fn test_focus_toggle() {
    assert_eq!(Focus::Canvas.toggle(), Focus::Program);
    assert_eq!(Focus::Program.toggle(), Focus::Canvas);
}

#[test]
fn test_program_viewer_emits_select_events() {
    let model = model_from("point A 0 0\npoint B 1 1\npoint C 2 2\n");
    let mut viewer = ProgramViewer::new();

    assert_eq!(
        viewer.handle_key(key(KeyCode::Down), &model),
        Some(ViewerEvent::SelectCommand(1))
    );
    assert_eq!(
        viewer.handle_key(key(KeyCode::End), &model),
        Some(ViewerEvent::SelectCommand(2))
    );
    // Already at the first command: Up changes nothing.
    assert_eq!(
        viewer.handle_key(key(KeyCode::Up), &model),
        Some(ViewerEvent::NoChange)
    );
}

#[test]
fn test_program_viewer_on_empty_program() {
    let model = model_from("");
    let mut viewer = ProgramViewer::new();
    assert_eq!(
        viewer.handle_key(key(KeyCode::Down), &model),
        Some(ViewerEvent::NoChange)
    );
}

#[test]
fn test_canvas_pan_and_zoom_state() {
    let model = model_from("point A 0 0\n");
    let mut canvas = CanvasViewer::new();
    assert_eq!(canvas.offset(), (0.0, 0.0));
    assert_eq!(canvas.zoom(), 1.0);

    canvas.handle_key(key(KeyCode::Right), &model);
    canvas.handle_key(key(KeyCode::Up), &model);
    assert_eq!(canvas.offset(), (1.0, 1.0));

    canvas.handle_key(key(KeyCode::Char('+')), &model);
    assert!(canvas.zoom() > 1.0);

    canvas.handle_key(key(KeyCode::Char('0')), &model);
    assert_eq!(canvas.offset(), (0.0, 0.0));
    assert_eq!(canvas.zoom(), 1.0);
}

#[test]
fn test_program_viewer_scrolls_to_keep_selection_visible() {
    let source: String = (0..24)
        .map(|i| format!("point P{} {} {}\n", i, i, i))
        .collect();
    let model = model_from(&source);
    let mut viewer = ProgramViewer::new();
    assert_eq!(viewer.scroll_offset(), 0);

    assert_eq!(
        viewer.handle_key(key(KeyCode::End), &model),
        Some(ViewerEvent::SelectCommand(23))
    );
    assert!(viewer.scroll_offset() > 0);
}

#[test]
fn test_app_selection_follows_program_events() {
    let mut app = App::new(model_from("point A 0 0\npoint B 1 1\n"));
    app.focus = Focus::Program;

    let changed = app.handle_key(key(KeyCode::Down));
    assert!(changed);
    assert_eq!(app.model.selected(), Some(1));
}

#[test]
fn test_app_quits_on_q() {
    let mut app = App::new(model_from("point A 0 0\n"));
    assert!(!app.should_quit);
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_app_tab_toggles_focus() {
    let mut app = App::new(model_from("point A 0 0\n"));
    assert_eq!(app.focus, Focus::Canvas);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Program);
}
