//! XML-like AST tag serialization
//!
//! Each node becomes a tag named after its type, payload fields become attributes and
//! text values become tag content:
//!
//! ```text
//! <document>
//!   <paragraph>
//!     <text>see </text>
//!     <link href="example.com">
//!       <text>docs</text>
//!     </link>
//!   </paragraph>
//! </document>
//! ```

use super::registry::Formatter;
use crate::mark::ast::{Document, Node, NodeKind};
use crate::mark::error::Result;

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn tag_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Text { .. } => "text",
        NodeKind::Header { .. } => "header",
        NodeKind::Paragraph => "paragraph",
        NodeKind::Bold => "bold",
        NodeKind::Italic => "italic",
        NodeKind::Monospace => "monospace",
        NodeKind::Codeblock { .. } => "codeblock",
        NodeKind::Link { .. } => "link",
        NodeKind::Image { .. } => "image",
        NodeKind::Reference => "reference",
        NodeKind::HorizontalRule => "horizontal-rule",
        NodeKind::UnorderedList => "unordered-list",
        NodeKind::OrderedList => "ordered-list",
        NodeKind::ListItem => "list-item",
        NodeKind::Blockquote => "blockquote",
    }
}

fn attributes(kind: &NodeKind) -> String {
    let pairs: Vec<(&str, String)> = match kind {
        NodeKind::Header { level } => vec![("level", level.to_string())],
        NodeKind::Codeblock {
            language: Some(language),
        } => vec![("language", language.clone())],
        NodeKind::Link { href } => vec![("href", href.clone())],
        NodeKind::Image { path, alt } => vec![("path", path.clone()), ("alt", alt.clone())],
        _ => Vec::new(),
    };
    pairs
        .into_iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, escape_xml(&value)))
        .collect()
}

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn visit(&mut self, node: &Node) {
        let tag = tag_name(&node.kind);
        let attrs = attributes(&node.kind);
        let indent = self.indent();

        if let NodeKind::Text { value } = &node.kind {
            self.output
                .push_str(&format!("{indent}<{tag}>{}</{tag}>\n", escape_xml(value)));
            return;
        }

        if node.children.is_empty() {
            self.output
                .push_str(&format!("{indent}<{tag}{attrs}></{tag}>\n"));
            return;
        }

        self.output.push_str(&format!("{indent}<{tag}{attrs}>\n"));
        self.indent_level += 1;
        for child in &node.children {
            self.visit(child);
        }
        self.indent_level -= 1;
        self.output.push_str(&format!("{indent}</{tag}>\n"));
    }
}

/// Serialize a document to the tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut serializer = TagSerializer {
        output: String::from("<document>\n"),
        indent_level: 1,
    };
    for block in &doc.blocks {
        serializer.visit(block);
    }
    serializer.output.push_str("</document>\n");
    serializer.output
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like nesting of node types"
    }
}
