//! List parsing and assembly
//!
//! Lists are read in two passes. The first pass collects a flat sequence of
//! [`FlatItem`]s, each tagged with its indent (leading tab count) and marker kind. The
//! second pass, [`assemble`], rebuilds the nesting bottom-up from the tail of that
//! sequence: the trailing run of equally indented items is folded into a new list
//! under the item that precedes it whenever the run is indented deeper than that item.
//!
//! Indent lives only on `FlatItem`; the finished `ListItem` nodes never carry it.

use super::blockquote::parse_blockquote;
use super::blocks::{parse_header, parse_paragraph, strip_leading_space};
use super::state::ParserState;
use crate::mark::ast::{ListKind, Node, NodeKind};
use crate::mark::lexing::TokenKind;
use tracing::trace;

/// A list item before nesting is reconstructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    pub indent: usize,
    pub marker: ListKind,
    pub children: Vec<Node>,
}

impl FlatItem {
    pub fn new(indent: usize, marker: ListKind, children: Vec<Node>) -> Self {
        Self {
            indent,
            marker,
            children,
        }
    }

    fn into_node(self) -> Node {
        Node::new(NodeKind::ListItem, self.children)
    }
}

fn marker_kind(kind: TokenKind) -> Option<ListKind> {
    match kind {
        TokenKind::Hyphen => Some(ListKind::Unordered),
        TokenKind::Plus => Some(ListKind::Ordered),
        _ => None,
    }
}

/// Parse a whole list starting on its first marker
pub fn parse_list(state: &mut ParserState<'_>, kind: ListKind) -> Node {
    let items = parse_list_items(state, kind);
    trace!(items = items.len(), ?kind, "assembling list");
    assemble(kind, items)
}

/// Collect items until a blank line, a quoted line or the end of input
///
/// A line opening with `>` belongs to whatever encloses the list, so the cursor is left
/// on the line break before it.
fn parse_list_items(state: &mut ParserState<'_>, kind: ListKind) -> Vec<FlatItem> {
    let mut items = Vec::new();
    let mut indent = 0;
    let mut marker = kind;

    while state.peek().is_some() && state.peek_kind() != TokenKind::Newline {
        if state.kind() == TokenKind::Newline {
            if state.peek_kind() == TokenKind::CloseAngle {
                break;
            }
            state.advance();
        }

        if state.kind() == TokenKind::Tab {
            indent = 0;
            while !state.at_end() && state.kind() == TokenKind::Tab {
                indent += 1;
                state.advance();
            }
        } else if state.kind().is_list_marker() && state.at_line_start() {
            indent = 0;
        }

        items.push(parse_list_item(state, indent, &mut marker));
    }

    items
}

/// One item body: a header, a blockquote, nothing, or a paragraph
///
/// Items without their own marker inherit the marker of the item before them. A quote
/// body is only recognized right after a marker.
fn parse_list_item(state: &mut ParserState<'_>, indent: usize, marker: &mut ListKind) -> FlatItem {
    let marked = match marker_kind(state.kind()) {
        Some(kind) => {
            *marker = kind;
            state.advance();
            true
        }
        None => false,
    };
    if state.raw() == " " {
        state.advance();
    }

    let mut children = match state.kind() {
        TokenKind::Hash => vec![parse_header(state)],
        TokenKind::CloseAngle if marked => vec![parse_blockquote(state)],
        TokenKind::Newline => Vec::new(),
        _ => vec![parse_paragraph(state)],
    };
    strip_leading_space(&mut children);

    FlatItem::new(indent, *marker, children)
}

/// Rebuild list nesting from a flat, indent-tagged item sequence
///
/// For well-formed indents (first item at 0, each item at most one level deeper than
/// the previous one) the resulting depth is the maximum indent plus one and a pre-order
/// walk visits the items in their source order. Deeper jumps are folded in a single
/// step.
pub fn assemble(kind: ListKind, mut items: Vec<FlatItem>) -> Node {
    let mut i = items.len().saturating_sub(1);

    while i > 0 {
        let indent = items[i].indent;
        let end = i;
        while items[i].indent == indent {
            i -= 1;
            if i == 0 {
                break;
            }
        }

        if indent > items[i].indent {
            let run: Vec<FlatItem> = items.drain(i + 1..=end).collect();
            let container = run[0].marker.container();
            let nested = Node::new(container, run.into_iter().map(FlatItem::into_node).collect());
            items[i].children.push(nested);
            i = items.len() - 1;
        }
    }

    Node::new(
        kind.container(),
        items.into_iter().map(FlatItem::into_node).collect(),
    )
}
