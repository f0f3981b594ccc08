//! Main application state and event handling
//!
//! The App struct brings together:
//! - Model (the application state)
//! - CanvasViewer and ProgramViewer (the UI panels)
//! - Focus management (which panel has keyboard focus)
//! - Global key handling (quit, focus switching, delegating to panels)

use super::canvasviewer::CanvasViewer;
use super::model::{Focus, Model};
use super::programviewer::ProgramViewer;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::KeyEvent;

/// The main application
pub struct App {
    /// The model holding scene and selection state
    pub model: Model,

    /// Scene canvas (draws the resolved geometry)
    pub canvas_viewer: CanvasViewer,

    /// Program viewer (lists parsed commands)
    pub program_viewer: ProgramViewer,

    /// Which panel currently has focus
    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application from a model
    pub fn new(model: Model) -> Self {
        App {
            model,
            canvas_viewer: CanvasViewer::new(),
            program_viewer: ProgramViewer::new(),
            focus: Focus::default(),
            should_quit: false,
        }
    }

    /// Toggle focus between panels
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed (needed for re-rendering)
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Check for quit key (q or Ctrl+C)
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Tab => {
                self.toggle_focus();
                return true;
            }
            _ => {}
        }

        // Delegate to focused panel
        let event = match self.focus {
            Focus::Canvas => self.canvas_viewer.handle_key(key, &self.model),
            Focus::Program => self.program_viewer.handle_key(key, &self.model),
        };

        // Process the event if there is one
        if let Some(event) = event {
            self.process_viewer_event(event)
        } else {
            false
        }
    }

    /// Process a viewer event and update the model
    fn process_viewer_event(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::SelectCommand(index) => {
                self.model.select(index);
                true
            }
            ViewerEvent::NoChange => false,
        }
    }
}
