//! Treeviz formatter for AST nodes
//!
//! One line per node, nesting drawn with box connectors:
//!
//! ```text
//! ⧉ 2 blocks
//! ├─ # h1
//! │ └─ ◦ Hello
//! └─ ☰ 2 items
//!   ├─ • one
//!   │ └─ ¶ one
//!   │   └─ ◦ one
//!   └─ • two
//!     └─ ¶ two
//!       └─ ◦ two
//! ```
//!
//! Labels are truncated to 30 characters.

use super::registry::Formatter;
use crate::mark::ast::{AstNode, Document, Node};
use crate::mark::error::Result;

fn truncate(s: &str, max_chars: usize) -> String {
    let single_line = s.replace('\n', "↵");
    if single_line.chars().count() > max_chars {
        let mut truncated = single_line.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        single_line
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Header" => "#",
        "Paragraph" => "¶",
        "Text" => "◦",
        "Bold" => "𝐁",
        "Italic" => "𝐼",
        "Monospace" => "ƒ",
        "Codeblock" => "𝒱",
        "Link" => "⊕",
        "Reference" => "†",
        "Image" => "▣",
        "HorizontalRule" => "―",
        "UnorderedList" | "OrderedList" => "☰",
        "ListItem" => "•",
        "Blockquote" => "❝",
        _ => "○",
    }
}

fn node_line(icon: &str, label: &str) -> String {
    let label = truncate(label, 30);
    if label.is_empty() {
        icon.to_string()
    } else {
        format!("{} {}", icon, label)
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        node_line(get_icon(node.node_type()), &node.display_label())
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i + 1 == count, output);
    }
}

/// Render a document as a treeviz string
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = node_line(get_icon(doc.node_type()), &doc.display_label());
    output.push('\n');
    let count = doc.blocks.len();
    for (i, block) in doc.blocks.iter().enumerate() {
        format_node(block, "", i + 1 == count, &mut output);
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "One line per node with tree connectors"
    }
}
