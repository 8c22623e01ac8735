//! Processing API for mark sources
//!
//! Entry points for the whole pipeline, plus a small format language used by the CLI to
//! pick what to emit: a stage (`token`, `ast`) and a format for that stage, written as
//! `stage-format` (e.g. `token-simple`, `ast-treeviz`), or plain `html`.
//!
//! ```rust,ignore
//! use mark::mark::processor::{compile, ProcessingSpec, process_source};
//! use mark::mark::formats::RenderOptions;
//!
//! let html = compile("# Hello", &RenderOptions::default())?;
//! assert_eq!(html, "<h1>Hello</h1>");
//!
//! let spec = ProcessingSpec::from_string("ast-treeviz")?;
//! let tree = process_source("# Hello", &spec, &RenderOptions::default())?;
//! ```

use crate::mark::ast::Document;
use crate::mark::error::{MarkError, Result};
use crate::mark::formats::tokens::{to_json_str, to_simple_str};
use crate::mark::formats::{FormatRegistry, HtmlRenderer, RenderOptions};
use crate::mark::lexing::{tokenize, Token};
use crate::mark::parsing::parse;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Which pipeline output to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
    Html,
}

impl OutputFormat {
    fn registry_name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Html => "html",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    pub const HTML: ProcessingSpec = ProcessingSpec {
        stage: ProcessingStage::Html,
        format: OutputFormat::Html,
    };

    /// Parse a format string like "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self> {
        if format_str == "html" {
            return Ok(Self::HTML);
        }

        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| MarkError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(MarkError::InvalidFormat(format!("unknown stage '{}'", other))),
        };

        let format = match (stage, format) {
            (ProcessingStage::Token, "simple") => OutputFormat::Simple,
            (ProcessingStage::Token, "json") | (ProcessingStage::Ast, "json") => OutputFormat::Json,
            (ProcessingStage::Ast, "yaml") => OutputFormat::Yaml,
            (ProcessingStage::Ast, "tag") => OutputFormat::Tag,
            (ProcessingStage::Ast, "treeviz") => OutputFormat::Treeviz,
            (stage, format) => {
                return Err(MarkError::InvalidFormat(format!(
                    "format '{}' is not supported for the {:?} stage",
                    format, stage
                )))
            }
        };

        Ok(ProcessingSpec { stage, format })
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        available_formats()
            .iter()
            .filter_map(|name| ProcessingSpec::from_string(name).ok())
            .collect()
    }
}

/// Every format string accepted by [`ProcessingSpec::from_string`]
pub fn available_formats() -> Vec<&'static str> {
    vec![
        "token-simple",
        "token-json",
        "ast-tag",
        "ast-treeviz",
        "ast-json",
        "ast-yaml",
        "html",
    ]
}

fn check_source(source: &str) -> Result<()> {
    if source.is_empty() {
        return Err(MarkError::EmptySource);
    }
    Ok(())
}

/// Tokenize a non-empty source
pub fn lex_source(source: &str) -> Result<Vec<Token>> {
    check_source(source)?;
    Ok(tokenize(source))
}

/// Tokenize and parse a non-empty source
pub fn parse_document(source: &str) -> Result<Document> {
    let tokens = lex_source(source)?;
    Ok(parse(&tokens))
}

/// Compile a source all the way to HTML
pub fn compile(source: &str, options: &RenderOptions) -> Result<String> {
    let doc = parse_document(source)?;
    let html = HtmlRenderer::new(*options).render(&doc);
    debug!(blocks = doc.blocks.len(), bytes = html.len(), "rendered html");
    Ok(html)
}

/// Compile a source and write the HTML to `path`
pub fn compile_to_file<P: AsRef<Path>>(
    source: &str,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let html = compile(source, options)?;
    fs::write(path.as_ref(), html)?;
    info!(path = %path.as_ref().display(), "wrote html");
    Ok(())
}

/// Run a source through the pipeline up to the requested stage and format it
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = lex_source(source)?;
            match spec.format {
                OutputFormat::Simple => Ok(to_simple_str(&tokens)),
                OutputFormat::Json => to_json_str(&tokens),
                other => Err(MarkError::InvalidFormat(format!(
                    "{:?} is not a token format",
                    other
                ))),
            }
        }
        ProcessingStage::Ast | ProcessingStage::Html => {
            let doc = parse_document(source)?;
            FormatRegistry::with_options(*options).serialize(&doc, spec.format.registry_name())
        }
    }
}

/// Read a file and process it according to `spec`
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, spec, options)
}
