//! Fluent assertions over parsed documents

use super::testing_matchers::TextMatch;
use crate::mark::ast::{AstNode, Document, Node, NodeKind};

/// Start asserting on a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        doc,
        context: "doc".to_string(),
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| n.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Nesting depth of list containers below and including `node`
fn list_depth(node: &Node) -> usize {
    if !node.kind.is_list() {
        return 0;
    }
    let deepest = node
        .children
        .iter()
        .flat_map(|item| item.children.iter())
        .map(list_depth)
        .max()
        .unwrap_or(0);
    deepest + 1
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.blocks.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blocks, found {} blocks: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.doc.blocks)
        );
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = self.doc.blocks.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Block index {} out of bounds (document has {} blocks)",
                self.context,
                index,
                self.doc.blocks.len()
            )
        });
        assertion(NodeAssertion {
            node,
            context: format!("{}:blocks[{}]", self.context, index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

macro_rules! kind_assertions {
    ($($method:ident => $name:literal),* $(,)?) => {
        $(
            pub fn $method(self) -> Self {
                self.node_type($name)
            }
        )*
    };
}

impl<'a> NodeAssertion<'a> {
    pub fn node_type(self, expected: &str) -> Self {
        let actual = self.node.node_type();
        assert_eq!(
            actual, expected,
            "{}: Expected {} node, found {} ({:?})",
            self.context, expected, actual, self.node.kind
        );
        self
    }

    kind_assertions! {
        assert_text => "Text",
        assert_header => "Header",
        assert_paragraph => "Paragraph",
        assert_bold => "Bold",
        assert_italic => "Italic",
        assert_monospace => "Monospace",
        assert_codeblock => "Codeblock",
        assert_link => "Link",
        assert_image => "Image",
        assert_reference => "Reference",
        assert_horizontal_rule => "HorizontalRule",
        assert_unordered_list => "UnorderedList",
        assert_ordered_list => "OrderedList",
        assert_list_item => "ListItem",
        assert_blockquote => "Blockquote",
    }

    /// Plain text of the whole subtree
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.node.plain_text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string())
            .assert(&self.node.plain_text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string())
            .assert(&self.node.plain_text(), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.node.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = self.node.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (node has {} children: [{}])",
                self.context,
                index,
                self.node.children.len(),
                summarize(&self.node.children)
            )
        });
        assertion(NodeAssertion {
            node,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    pub fn level(self, expected: usize) -> Self {
        match &self.node.kind {
            NodeKind::Header { level } => assert_eq!(
                *level, expected,
                "{}: Expected header level {}, found {}",
                self.context, expected, level
            ),
            other => panic!("{}: Expected Header, found {:?}", self.context, other),
        }
        self
    }

    pub fn href(self, expected: &str) -> Self {
        match &self.node.kind {
            NodeKind::Link { href } => assert_eq!(
                href, expected,
                "{}: Expected href '{}', found '{}'",
                self.context, expected, href
            ),
            other => panic!("{}: Expected Link, found {:?}", self.context, other),
        }
        self
    }

    pub fn language(self, expected: Option<&str>) -> Self {
        match &self.node.kind {
            NodeKind::Codeblock { language } => assert_eq!(
                language.as_deref(),
                expected,
                "{}: Expected codeblock language {:?}, found {:?}",
                self.context,
                expected,
                language
            ),
            other => panic!("{}: Expected Codeblock, found {:?}", self.context, other),
        }
        self
    }

    pub fn image(self, expected_path: &str, expected_alt: &str) -> Self {
        match &self.node.kind {
            NodeKind::Image { path, alt } => {
                assert_eq!(
                    path, expected_path,
                    "{}: Expected image path '{}', found '{}'",
                    self.context, expected_path, path
                );
                assert_eq!(
                    alt, expected_alt,
                    "{}: Expected image alt '{}', found '{}'",
                    self.context, expected_alt, alt
                );
            }
            other => panic!("{}: Expected Image, found {:?}", self.context, other),
        }
        self
    }

    /// Number of nested list levels, counting this list as one
    pub fn list_depth(self, expected: usize) -> Self {
        let actual = list_depth(self.node);
        assert_eq!(
            actual, expected,
            "{}: Expected list depth {}, found {}",
            self.context, expected, actual
        );
        self
    }
}
