//! Block dispatcher and the simple block recognizers
//!
//! Dispatch looks at the current token and at most one token of lookahead:
//!
//! | current      | condition                      | block          |
//! |--------------|--------------------------------|----------------|
//! | `#`          |                                | header         |
//! | `` ` ``      | next is `` ` ``                | codeblock      |
//! | `-`          | next is `-`                    | horizontal rule|
//! | `-`          |                                | unordered list |
//! | `+`          |                                | ordered list   |
//! | `>`          | line start or after a space    | blockquote     |
//! | newline      |                                | nothing        |
//! | anything else|                                | paragraph      |

use super::blockquote::parse_blockquote;
use super::inlines::parse_inline;
use super::lists::parse_list;
use super::state::ParserState;
use crate::mark::ast::{ListKind, Node, NodeKind};
use crate::mark::lexing::TokenKind;
use tracing::{trace, warn};

/// Tokens that end a paragraph when they open the next line
const PARAGRAPH_STOPS: [TokenKind; 6] = [
    TokenKind::Hash,
    TokenKind::Plus,
    TokenKind::Backtick,
    TokenKind::Tab,
    TokenKind::Hyphen,
    TokenKind::CloseAngle,
];

/// Recognize one block starting at the current token
///
/// Returns `None` for a blank line.
pub fn parse_block(state: &mut ParserState<'_>) -> Option<Node> {
    let kind = state.kind();
    let next = state.peek_kind();
    trace!(position = state.position(), ?kind, "dispatching block");

    let block = match kind {
        TokenKind::Hash => parse_header(state),
        TokenKind::Backtick if next == TokenKind::Backtick => parse_codeblock(state),
        TokenKind::Hyphen if next == TokenKind::Hyphen => parse_horizontal_rule(state),
        TokenKind::Hyphen => parse_list(state, ListKind::Unordered),
        TokenKind::Plus => parse_list(state, ListKind::Ordered),
        TokenKind::CloseAngle if opens_blockquote(state) => parse_blockquote(state),
        TokenKind::Newline => return None,
        _ => parse_paragraph(state),
    };
    Some(block)
}

fn opens_blockquote(state: &ParserState<'_>) -> bool {
    state.at_line_start() || state.previous().is_some_and(|t| t.raw == " ")
}

/// `#`-prefixed heading, level is the number of hashes
pub fn parse_header(state: &mut ParserState<'_>) -> Node {
    let mut level = 0;
    while !state.at_end() && state.kind() == TokenKind::Hash {
        level += 1;
        state.advance();
    }

    let mut children = parse_inline(state, TokenKind::Newline);
    strip_leading_space(&mut children);
    Node::new(
        NodeKind::Header {
            level: level.max(1),
        },
        children,
    )
}

/// Inline runs across line breaks until a blank line, a block opener or a soft break
pub fn parse_paragraph(state: &mut ParserState<'_>) -> Node {
    let mut children = Vec::new();

    loop {
        children.extend(parse_inline(state, TokenKind::Newline));

        if state.at_end()
            || state.peek_kind() == TokenKind::Newline
            || PARAGRAPH_STOPS.contains(&state.peek_kind())
            || state.previous_kind() == Some(TokenKind::CarriageReturn)
        {
            break;
        }
        state.advance();
    }

    Node::new(NodeKind::Paragraph, children)
}

/// Fenced code: tokens are captured verbatim up to the next backtick
pub fn parse_codeblock(state: &mut ParserState<'_>) -> Node {
    state.advance_by(3);

    let language = parse_inline(state, TokenKind::Newline)
        .first()
        .map(|node| node.plain_text().trim().to_string())
        .filter(|lang| !lang.is_empty());

    let mut code = String::new();
    while !state.at_end() && state.kind() != TokenKind::Backtick {
        state.advance();
        if let Some(token) = state.current() {
            code.push_str(&token.raw);
        }
    }

    if state.at_end() {
        warn!(?language, "unterminated codeblock");
    } else {
        code.pop();
    }
    if code.ends_with('\n') {
        code.pop();
    }

    state.advance_by(2);
    Node::new(NodeKind::Codeblock { language }, vec![Node::text(code)])
}

/// A run of hyphens; the cursor is left on the token after the run
pub fn parse_horizontal_rule(state: &mut ParserState<'_>) -> Node {
    while !state.at_end() && state.kind() == TokenKind::Hyphen {
        state.advance();
    }
    Node::leaf(NodeKind::HorizontalRule)
}

/// Drop the single space that separates a block marker from its content
///
/// Descends into the first node until a text node is found, removing the text node if it
/// held nothing but that space.
pub(crate) fn strip_leading_space(nodes: &mut Vec<Node>) {
    let Some(first) = nodes.first_mut() else {
        return;
    };

    match &mut first.kind {
        NodeKind::Text { value } => {
            if value.starts_with(' ') {
                value.remove(0);
                if value.is_empty() {
                    nodes.remove(0);
                }
            }
        }
        NodeKind::Codeblock { .. } => {}
        _ => strip_leading_space(&mut first.children),
    }
}
