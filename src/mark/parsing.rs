//! Parsing module for the mark dialect
//!
//! A single-pass recursive descent over the token vector produced by
//! [`tokenize`](crate::mark::lexing::tokenize). The parser never fails: constructs that do
//! not match the expected shape are consumed best-effort and produce a partial tree.
//!
//! ## Structure
//!
//! - `state` - the cursor shared by every recognizer
//! - `blocks` - block dispatch, headers, paragraphs, codeblocks and rules
//! - `inlines` - inline runs (emphasis, links, images, monospace, references)
//! - `lists` - flat item collection and nesting reconstruction
//! - `blockquote` - quotes, parsed by recursing into the block dispatcher
//!
//! Every recognizer starts with the cursor on its first token and leaves it on the last
//! token it consumed. The document loop steps past that token before dispatching again.

pub mod blockquote;
pub mod blocks;
pub mod inlines;
pub mod lists;
pub mod state;

#[cfg(test)]
mod tests;

pub use blocks::parse_block;
pub use inlines::parse_inline;
pub use lists::{assemble, FlatItem};
pub use state::ParserState;

use crate::mark::ast::Document;
use crate::mark::lexing::Token;
use tracing::debug;

/// Parse a token stream into a document
pub fn parse(tokens: &[Token]) -> Document {
    let mut state = ParserState::new(tokens);
    let mut blocks = Vec::new();

    while !state.at_end() {
        if let Some(block) = parse_block(&mut state) {
            blocks.push(block);
        }
        state.advance();
    }

    debug!(tokens = tokens.len(), blocks = blocks.len(), "parsed document");
    Document::new(blocks)
}
