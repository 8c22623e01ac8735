//! Blockquote recognizer
//!
//! The body is parsed with the block dispatcher, one block at a time. A quote continues
//! past a line break only when the next line starts with `>`; anything else ends it with
//! the cursor left on the line break so the caller sees the next line untouched.

use super::blocks::{parse_block, strip_leading_space};
use super::state::ParserState;
use crate::mark::ast::{Node, NodeKind};
use crate::mark::lexing::TokenKind;

/// Parse a blockquote; the cursor starts on the opening `>`
pub fn parse_blockquote(state: &mut ParserState<'_>) -> Node {
    let mut children = Vec::new();

    while state.peek().is_some() && state.peek_kind() != TokenKind::Newline {
        if state.peek_raw() == " " {
            state.advance();
        }
        state.advance();

        if let Some(mut block) = parse_block(state) {
            strip_leading_space(&mut block.children);
            children.push(block);
        }

        if state.kind() == TokenKind::Newline {
            if state.peek_kind() == TokenKind::CloseAngle {
                state.advance();
            } else {
                break;
            }
        }
    }

    Node::new(NodeKind::Blockquote, children)
}
