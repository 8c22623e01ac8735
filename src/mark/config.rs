//! Configuration loader for the mark compiler.
//!
//! `defaults/mark.default.toml` is embedded into the binary so documented defaults and
//! runtime behavior stay in sync. Callers layer user files and command-line overrides
//! on top via [`Loader`] before deserializing into [`MarkConfig`].

use crate::mark::formats::{HrefPolicy, RenderOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/mark.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct MarkConfig {
    pub render: RenderConfig,
    pub debug: DebugConfig,
}

/// Knobs handed to the HTML renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub pretty: bool,
    pub base_indent: usize,
    pub href_policy: HrefPolicy,
}

/// Debug dumps written to stderr by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugConfig {
    pub tokens: bool,
    pub ast: bool,
}

impl MarkConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            pretty: self.render.pretty,
            base_indent: self.render.base_indent,
            href_policy: self.render.href_policy,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
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

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
