//! Token definitions for the mark dialect
//!
//! A token is a kind plus the literal text it was scanned from. Punctuation tokens carry
//! their single character, `Text` carries the accumulated run with escapes resolved.

use serde::Serialize;
use std::fmt;

/// All token kinds produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Hash,
    Hyphen,
    Plus,
    Asterisk,
    Backtick,
    Bang,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    OpenAngle,
    CloseAngle,
    /// Soft break marker produced from a 2-space run (or a literal `\r`)
    CarriageReturn,
    Newline,
    /// Indentation marker produced from a 4-space run (or a literal tab)
    Tab,
    Text,
}

impl TokenKind {
    /// Check if this kind is a single-character punctuation marker
    pub fn is_punctuation(&self) -> bool {
        !matches!(self, TokenKind::Text)
    }

    /// Check if this kind starts a list item
    pub fn is_list_marker(&self) -> bool {
        matches!(self, TokenKind::Hyphen | TokenKind::Plus)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Hash => "HASH",
            TokenKind::Hyphen => "HYPHEN",
            TokenKind::Plus => "PLUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::Bang => "BANG",
            TokenKind::OpenBracket => "OPEN BRACKET",
            TokenKind::CloseBracket => "CLOSE BRACKET",
            TokenKind::OpenParen => "OPEN PAREN",
            TokenKind::CloseParen => "CLOSE PAREN",
            TokenKind::OpenAngle => "OPEN ANGLE",
            TokenKind::CloseAngle => "CLOSE ANGLE",
            TokenKind::CarriageReturn => "CARRIAGE RETURN",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Tab => "TAB",
            TokenKind::Text => "TEXT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn text(raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, raw)
    }

    pub fn newline() -> Self {
        Self::new(TokenKind::Newline, "\n")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  ->  {:?}", self.kind, self.raw)
    }
}
