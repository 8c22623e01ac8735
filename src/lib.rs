//! # mark
//!
//! A compiler for a lightweight markdown-like dialect. Source text is normalized and
//! tokenized, the token stream is parsed into a typed tree, and the tree is rendered to
//! HTML.
//!
//! File Layout
//!
//!   src/mark
//!     ├── lexing       Normalization and logos-based scanning
//!     ├── parsing      Block dispatcher, inline runs, list assembly, blockquotes
//!     ├── ast          Node and Document types
//!     ├── formats      HTML renderer and the debug dumps (tag, treeviz)
//!     ├── processor    Pipeline entry points and format selection
//!     └── config       Layered configuration
//!
//! For structural assertions in tests, see the [testing module](mark::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod mark;

pub use mark::ast::{Document, ListKind, Node, NodeKind};
pub use mark::error::{MarkError, Result};
pub use mark::formats::html::{HrefPolicy, HtmlRenderer, RenderOptions};
pub use mark::lexing::{tokenize, Token, TokenKind};
pub use mark::parsing::parse;
pub use mark::processor::{compile, parse_document};
