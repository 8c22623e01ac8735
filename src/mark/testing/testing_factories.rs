//! Test factories for tokens and flat list items

use crate::mark::ast::{ListKind, Node};
use crate::mark::lexing::{Token, TokenKind};
use crate::mark::parsing::FlatItem;

/// Make a single token
pub fn mk_token(kind: TokenKind, raw: &str) -> Token {
    Token::new(kind, raw)
}

/// Make a token vector from `(kind, raw)` pairs
pub fn mk_tokens(specs: &[(TokenKind, &str)]) -> Vec<Token> {
    specs
        .iter()
        .map(|(kind, raw)| mk_token(*kind, raw))
        .collect()
}

/// Make flat list items from an indent sequence, labelled `item-0`, `item-1`, ...
pub fn mk_flat_items(indents: &[usize], marker: ListKind) -> Vec<FlatItem> {
    indents
        .iter()
        .enumerate()
        .map(|(index, indent)| {
            FlatItem::new(*indent, marker, vec![Node::text(format!("item-{}", index))])
        })
        .collect()
}
