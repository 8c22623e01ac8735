//! Inline run recognizers
//!
//! An inline run collects text-level nodes until the current token has the requested end
//! kind. Each recognizer starts on its opening token and finishes on its closing one;
//! the run loop then steps past it. Tokens with no inline meaning are skipped.

use super::state::ParserState;
use crate::mark::ast::{Node, NodeKind};
use crate::mark::lexing::TokenKind;
use tracing::warn;

/// Parse inline nodes until the current token is `end` or the stream runs out
pub fn parse_inline(state: &mut ParserState<'_>, end: TokenKind) -> Vec<Node> {
    let mut nodes = Vec::new();

    while !state.at_end() && state.kind() != end {
        match state.kind() {
            TokenKind::OpenBracket => nodes.push(parse_link(state)),
            TokenKind::Asterisk if state.peek_kind() == TokenKind::Asterisk => {
                nodes.push(parse_bold(state))
            }
            TokenKind::Asterisk => nodes.push(parse_italic(state)),
            TokenKind::Bang if state.peek_kind() == TokenKind::OpenBracket => {
                nodes.push(parse_image(state))
            }
            TokenKind::Backtick if state.peek_kind() == TokenKind::Text => {
                nodes.push(parse_monospace(state))
            }
            TokenKind::OpenAngle => nodes.push(parse_reference(state)),
            TokenKind::Text => nodes.push(Node::text(state.raw())),
            _ => {}
        }
        state.advance();
    }

    nodes
}

/// `[label](href)`: the last node of the run is the target, the rest is the label
fn parse_link(state: &mut ParserState<'_>) -> Node {
    state.advance();
    let mut children = parse_inline(state, TokenKind::CloseParen);
    let href = match children.pop() {
        Some(target) => target.plain_text(),
        None => {
            warn!(position = state.position(), "link without a target");
            String::new()
        }
    };
    Node::new(NodeKind::Link { href }, children)
}

/// `![alt](path)`
fn parse_image(state: &mut ParserState<'_>) -> Node {
    state.advance_by(2);
    let parts = parse_inline(state, TokenKind::CloseParen);
    let text_at = |index: usize| parts.get(index).map(Node::plain_text).unwrap_or_default();
    let (alt, path) = (text_at(0), text_at(1));
    if path.is_empty() {
        warn!(position = state.position(), "image without a path");
    }
    Node::leaf(NodeKind::Image { path, alt })
}

/// `<target>`
fn parse_reference(state: &mut ParserState<'_>) -> Node {
    let mut children = Vec::new();
    if state.peek_kind() == TokenKind::Text {
        state.advance();
        children.push(Node::text(state.raw()));
    }
    if state.peek_kind() == TokenKind::CloseAngle {
        state.advance();
    }
    Node::new(NodeKind::Reference, children)
}

fn parse_monospace(state: &mut ParserState<'_>) -> Node {
    state.advance();
    Node::new(NodeKind::Monospace, parse_inline(state, TokenKind::Backtick))
}

fn parse_italic(state: &mut ParserState<'_>) -> Node {
    state.advance();
    Node::new(NodeKind::Italic, parse_inline(state, TokenKind::Asterisk))
}

/// `**text**`, with one level of italic allowed right after the opening pair
/// (`***a* b**`)
fn parse_bold(state: &mut ParserState<'_>) -> Node {
    state.advance_by(2);

    if state.kind() != TokenKind::Asterisk {
        let children = parse_inline(state, TokenKind::Asterisk);
        state.advance();
        return Node::new(NodeKind::Bold, children);
    }

    let mut children = vec![parse_italic(state)];
    if state.peek_kind() == TokenKind::Asterisk {
        // `***a***`: the italic closed right before the bold pair
        state.advance_by(2);
    } else {
        state.advance();
        children.extend(parse_inline(state, TokenKind::Asterisk));
        state.advance();
    }
    Node::new(NodeKind::Bold, children)
}
