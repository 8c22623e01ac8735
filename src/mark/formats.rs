//! Output format implementations
//!
//! - HTML, the compiler's real output (html)
//! - Debug views of the document tree (tag, treeviz, plus JSON and YAML through serde)
//! - Token stream dumps (tokens)

pub mod html;
pub mod registry;
pub mod tag;
pub mod tokens;
pub mod treeviz;

pub use html::{build_href, to_html, HrefPolicy, HtmlRenderer, RenderOptions};
pub use registry::{FormatRegistry, Formatter};
pub use tag::{serialize_document as serialize_ast_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
