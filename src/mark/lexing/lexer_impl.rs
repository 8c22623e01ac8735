//! Implementation of the mark scanner
//!
//! The character classes are recognized by logos. Runs of ordinary characters come out of
//! logos in pieces (a text chunk, an escaped character, another chunk), so the scanner
//! stitches them back into a single `Text` token before the next punctuation token is
//! emitted.

use super::tokens::{Token, TokenKind};
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[token("#")]
    Hash,
    #[token("-")]
    Hyphen,
    #[token("+")]
    Plus,
    #[token("*")]
    Asterisk,
    #[token("`")]
    Backtick,
    #[token("!")]
    Bang,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("<")]
    OpenAngle,
    #[token(">")]
    CloseAngle,
    #[token("\r")]
    CarriageReturn,
    #[token("\n")]
    Newline,
    #[token("\t")]
    Tab,

    // Backslash plus the character it escapes, newline included
    #[regex(r"\\(.|\n)")]
    Escaped,

    #[regex(r"[^#\-+*`!\[\]()<>\r\n\t\\]+")]
    Run,
}

impl Lexeme {
    fn punctuation(self) -> Option<TokenKind> {
        let kind = match self {
            Lexeme::Hash => TokenKind::Hash,
            Lexeme::Hyphen => TokenKind::Hyphen,
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Asterisk => TokenKind::Asterisk,
            Lexeme::Backtick => TokenKind::Backtick,
            Lexeme::Bang => TokenKind::Bang,
            Lexeme::OpenBracket => TokenKind::OpenBracket,
            Lexeme::CloseBracket => TokenKind::CloseBracket,
            Lexeme::OpenParen => TokenKind::OpenParen,
            Lexeme::CloseParen => TokenKind::CloseParen,
            Lexeme::OpenAngle => TokenKind::OpenAngle,
            Lexeme::CloseAngle => TokenKind::CloseAngle,
            Lexeme::CarriageReturn => TokenKind::CarriageReturn,
            Lexeme::Newline => TokenKind::Newline,
            Lexeme::Tab => TokenKind::Tab,
            Lexeme::Escaped | Lexeme::Run => return None,
        };
        Some(kind)
    }
}

/// Scan already-normalized text into tokens.
///
/// The returned sequence always ends with a `Newline` token, even when the source's last
/// newline was escaped into text.
pub fn scan(normalized: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut lexer = Lexeme::lexer(normalized);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(Lexeme::Run) => run.push_str(slice),
            // Drop the backslash, keep what it escaped
            Ok(Lexeme::Escaped) => run.push_str(&slice[1..]),
            Ok(lexeme) => {
                flush_run(&mut run, &mut tokens);
                if let Some(kind) = lexeme.punctuation() {
                    tokens.push(Token::new(kind, slice));
                }
            }
            // A dangling backslash with nothing after it
            Err(()) => run.push_str(slice),
        }
    }
    flush_run(&mut run, &mut tokens);

    if !tokens.last().is_some_and(|t| t.is(TokenKind::Newline)) {
        tokens.push(Token::newline());
    }

    tokens
}

fn flush_run(run: &mut String, tokens: &mut Vec<Token>) {
    if !run.is_empty() {
        tokens.push(Token::text(std::mem::take(run)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::testing::factories::mk_tokens;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_text() {
        let tokens = scan("hello world\n");
        assert_eq!(
            tokens,
            mk_tokens(&[(TokenKind::Text, "hello world"), (TokenKind::Newline, "\n")])
        );
    }

    #[test]
    fn test_every_punctuation_is_its_own_token() {
        let tokens = scan("#-+*`![]()<>\r\t\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Hash,
                TokenKind::Hyphen,
                TokenKind::Plus,
                TokenKind::Asterisk,
                TokenKind::Backtick,
                TokenKind::Bang,
                TokenKind::OpenBracket,
                TokenKind::CloseBracket,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::OpenAngle,
                TokenKind::CloseAngle,
                TokenKind::CarriageReturn,
                TokenKind::Tab,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_punctuation_splits_text_runs() {
        let tokens = scan("a*b*c\n");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenKind::Text, "a"),
                (TokenKind::Asterisk, "*"),
                (TokenKind::Text, "b"),
                (TokenKind::Asterisk, "*"),
                (TokenKind::Text, "c"),
                (TokenKind::Newline, "\n"),
            ])
        );
    }

    #[test]
    fn test_escaped_punctuation_joins_the_text_run() {
        let tokens = scan("1 \\+ 2 \\* 3\n");
        assert_eq!(
            tokens,
            mk_tokens(&[(TokenKind::Text, "1 + 2 * 3"), (TokenKind::Newline, "\n")])
        );
    }

    #[test]
    fn test_escaped_backslash_is_literal() {
        let tokens = scan("a\\\\#\n");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenKind::Text, "a\\"),
                (TokenKind::Hash, "#"),
                (TokenKind::Newline, "\n"),
            ])
        );
    }

    #[test]
    fn test_escaped_final_newline_still_terminates() {
        let tokens = scan("text\\\n");
        assert_eq!(
            tokens,
            mk_tokens(&[(TokenKind::Text, "text\n"), (TokenKind::Newline, "\n")])
        );
    }

    #[test]
    fn test_unicode_text() {
        let tokens = scan("héllo wörld — ünïcode\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].raw, "héllo wörld — ünïcode");
    }

    #[test]
    fn test_empty_input_yields_terminator() {
        assert_eq!(scan(""), vec![Token::newline()]);
    }
}
