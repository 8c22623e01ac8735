//! Cursor over the token stream
//!
//! Every recognizer receives the state by `&mut` and leaves the cursor on the last token
//! it consumed. Reads past either end never panic: the current and lookahead kinds read
//! as a newline so that every loop keyed on line breaks terminates.

use crate::mark::lexing::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct ParserState<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> ParserState<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token, `Newline` past the end
    pub fn kind(&self) -> TokenKind {
        self.current().map_or(TokenKind::Newline, |t| t.kind)
    }

    pub fn raw(&self) -> &'t str {
        self.current().map_or("", |t| t.raw.as_str())
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Kind of the next token, `Newline` past the end
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Newline, |t| t.kind)
    }

    pub fn peek_raw(&self) -> &'t str {
        self.peek().map_or("", |t| t.raw.as_str())
    }

    pub fn previous(&self) -> Option<&'t Token> {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.previous().map(|t| t.kind)
    }

    /// True when the current token opens a line
    pub fn at_line_start(&self) -> bool {
        matches!(self.previous_kind(), None | Some(TokenKind::Newline))
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    pub fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count);
    }
}
