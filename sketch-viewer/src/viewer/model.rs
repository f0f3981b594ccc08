//! Data model for the sketch viewer
//!
//! The Model struct holds the pure application state:
//! - The resolved scene (program + cached resolution)
//! - The active configuration
//! - The currently selected command, if any
//!
//! This separation of concerns makes testing easier: the model is pure data
//! and can be tested independently of rendering and UI logic.

use sketch_config::SketchConfig;
use sketch_parser::sketch::ast::{Command, Severity};
use sketch_parser::sketch::resolve::Drawable;
use sketch_parser::sketch::scene::Scene;

/// Which panel currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scene canvas has focus
    #[default]
    Canvas,
    /// Program listing has focus
    Program,
}

impl Focus {
    /// Toggle focus to the other panel
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::Canvas => Focus::Program,
            Focus::Program => Focus::Canvas,
        }
    }
}

/// The core data model
pub struct Model {
    /// The resolved scene
    pub scene: Scene,
    /// Active configuration
    pub config: SketchConfig,
    /// Index of the selected command, if the program is non-empty
    selected: Option<usize>,
}

impl Model {
    /// Create a new model from a scene and configuration. The first command
    /// starts selected, when there is one.
    pub fn new(scene: Scene, config: SketchConfig) -> Self {
        let selected = if scene.program().is_empty() {
            None
        } else {
            Some(0)
        };
        Model {
            scene,
            config,
            selected,
        }
    }

    pub fn command_count(&self) -> usize {
        self.scene.program().len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a command by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.command_count() {
            self.selected = Some(index);
        }
    }

    pub fn selected_command(&self) -> Option<&Command> {
        self.selected
            .and_then(|idx| self.scene.program().commands.get(idx))
    }

    /// The source line of the selected command.
    pub fn selected_line(&self) -> Option<usize> {
        self.selected
            .and_then(|idx| self.scene.program().lines.get(idx).copied())
    }

    /// The resolved geometry of the selected command, if it is drawable.
    pub fn selected_drawable(&self) -> Option<&Drawable> {
        self.selected
            .and_then(|idx| self.scene.resolution().drawables.get(idx))
            .and_then(|d| d.as_ref())
    }

    /// Whether the command at `index` failed to resolve.
    pub fn is_unresolved(&self, index: usize) -> bool {
        matches!(self.scene.resolution().drawables.get(index), Some(None))
    }

    /// Diagnostics counts as (errors, warnings), honoring the
    /// report_unresolved configuration knob.
    pub fn diagnostic_counts(&self) -> (usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        for diag in self.reported_diagnostics() {
            match diag.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
            }
        }
        (errors, warnings)
    }

    /// Diagnostics that configuration allows surfacing.
    pub fn reported_diagnostics(
        &self,
    ) -> impl Iterator<Item = &sketch_parser::sketch::ast::Diagnostic> {
        let report_unresolved = self.config.resolve.report_unresolved;
        self.scene.diagnostics().filter(move |d| {
            report_unresolved || d.code.as_deref() != Some("unresolved-reference")
        })
    }
}
