//! Node definitions

use serde::Serialize;

/// Kind-specific payload of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Text { value: String },
    Header { level: usize },
    Paragraph,
    Bold,
    Italic,
    Monospace,
    Codeblock { language: Option<String> },
    Link { href: String },
    Image { path: String, alt: String },
    Reference,
    HorizontalRule,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
}

impl NodeKind {
    /// Tag name for kinds that render as a plain `<tag>...</tag>` wrapper
    pub fn tag_name(&self) -> Option<&'static str> {
        match self {
            NodeKind::Paragraph => Some("p"),
            NodeKind::Bold => Some("strong"),
            NodeKind::Italic => Some("em"),
            NodeKind::Monospace => Some("code"),
            NodeKind::UnorderedList => Some("ul"),
            NodeKind::OrderedList => Some("ol"),
            NodeKind::ListItem => Some("li"),
            NodeKind::Blockquote => Some("blockquote"),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, NodeKind::UnorderedList | NodeKind::OrderedList)
    }
}

/// List flavour, decided by the item marker (`-` or `+`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn container(self) -> NodeKind {
        match self {
            ListKind::Unordered => NodeKind::UnorderedList,
            ListKind::Ordered => NodeKind::OrderedList,
        }
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text {
            value: value.into(),
        })
    }

    /// Concatenated text of every `Text` node in this subtree, in document order
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text { value } = &self.kind {
            out.push_str(value);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_walks_in_order() {
        let node = Node::new(
            NodeKind::Paragraph,
            vec![
                Node::text("a "),
                Node::new(NodeKind::Bold, vec![Node::text("b")]),
                Node::text(" c"),
            ],
        );
        assert_eq!(node.plain_text(), "a b c");
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(NodeKind::Paragraph.tag_name(), Some("p"));
        assert_eq!(NodeKind::OrderedList.tag_name(), Some("ol"));
        assert_eq!(NodeKind::Header { level: 2 }.tag_name(), None);
        assert_eq!(NodeKind::HorizontalRule.tag_name(), None);
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let node = Node::new(
            NodeKind::Link {
                href: "example.com".to_string(),
            },
            vec![Node::text("label")],
        );
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "link",
                "href": "example.com",
                "children": [{ "type": "text", "value": "label" }]
            })
        );
    }
}
