//! Traits shared by AST elements

use super::node::{Node, NodeKind};

/// Common naming for AST elements, used by the treeviz and tag formats
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match &self.kind {
            NodeKind::Text { .. } => "Text",
            NodeKind::Header { .. } => "Header",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Bold => "Bold",
            NodeKind::Italic => "Italic",
            NodeKind::Monospace => "Monospace",
            NodeKind::Codeblock { .. } => "Codeblock",
            NodeKind::Link { .. } => "Link",
            NodeKind::Image { .. } => "Image",
            NodeKind::Reference => "Reference",
            NodeKind::HorizontalRule => "HorizontalRule",
            NodeKind::UnorderedList => "UnorderedList",
            NodeKind::OrderedList => "OrderedList",
            NodeKind::ListItem => "ListItem",
            NodeKind::Blockquote => "Blockquote",
        }
    }

    fn display_label(&self) -> String {
        match &self.kind {
            NodeKind::Text { value } => value.clone(),
            NodeKind::Header { level } => format!("h{}", level),
            NodeKind::Codeblock { language } => language.clone().unwrap_or_default(),
            NodeKind::Link { href } => href.clone(),
            NodeKind::Image { path, alt } => format!("{} ({})", path, alt),
            NodeKind::UnorderedList | NodeKind::OrderedList => {
                format!("{} items", self.children.len())
            }
            _ => self.plain_text(),
        }
    }
}
