//! Shared configuration loader for the sketch toolchain.
//!
//! `defaults/sketch.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`SketchConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/sketch.default.toml");

/// Top-level configuration consumed by sketch applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SketchConfig {
    pub resolve: ResolveConfig,
    pub canvas: CanvasConfig,
    pub inspect: InspectConfig,
}

/// Resolution reporting knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveConfig {
    /// Whether unresolved references are surfaced to the user. The affected
    /// command is skipped from the drawable set either way.
    pub report_unresolved: bool,
}

/// Canvas rendering knobs for the terminal viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    pub show_grid: bool,
    pub show_labels: bool,
    pub label_step: i64,
    pub margin: i64,
}

/// Controls program-listing output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_line_numbers: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SketchConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SketchConfig, ConfigError> {
    Loader::new().build()
}
