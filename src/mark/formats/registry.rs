//! Format registry for document serialization
//!
//! Each document format implements [`Formatter`] and is registered by name in a
//! [`FormatRegistry`]. The processor looks formats up here when asked for an `ast-*` or
//! `html` output.

use super::html::{HtmlRenderer, RenderOptions};
use super::tag::TagFormatter;
use super::treeviz::TreevizFormatter;
use crate::mark::ast::Document;
use crate::mark::error::{MarkError, Result};
use std::collections::HashMap;

pub trait Formatter: Send + Sync {
    /// The name of this format (e.g. "treeviz", "tag")
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        Ok(serde_json::to_string_pretty(doc)?)
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        Ok(serde_yaml::to_string(doc)?)
    }

    fn description(&self) -> &str {
        "Document tree as YAML"
    }
}

pub struct HtmlFormatter {
    options: RenderOptions,
}

impl HtmlFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        Ok(HtmlRenderer::new(self.options).render(doc))
    }

    fn description(&self) -> &str {
        "Rendered HTML"
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String> {
        let formatter = self
            .get(format)
            .ok_or_else(|| MarkError::InvalidFormat(format!("format '{}' not found", format)))?;
        formatter.serialize(doc)
    }

    /// All registered format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Built-in formatters, with HTML rendered using `options`
    pub fn with_options(options: RenderOptions) -> Self {
        let mut registry = Self::new();
        registry.register(TreevizFormatter);
        registry.register(TagFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry.register(HtmlFormatter::new(options));
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_options(RenderOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
