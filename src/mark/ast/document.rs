//! Document element definition

use super::node::Node;
use super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// The parsed document: top-level blocks in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Node>,
}

impl Document {
    pub fn new(blocks: Vec<Node>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }
    fn display_label(&self) -> String {
        format!("{} blocks", self.blocks.len())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} blocks)", self.blocks.len())
    }
}
