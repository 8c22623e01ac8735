//! Lexer
//!
//!     This module orchestrates tokenization for the mark dialect. Lexing is a batch step:
//!     the whole source is normalized, then scanned in a single left-to-right pass, and the
//!     resulting token vector is handed to the parser in one piece.
//!
//! The Lexing Pipeline
//!
//!     The pipeline consists of:
//!         1. Normalization. See [normalization](normalization).
//!            Literal substring replacements applied once, in order: 4 spaces become a
//!            tab, the remaining 2-space runs become a carriage-return marker (the soft
//!            break signal), and the ` & `, `&<`, `&>` sequences become HTML entities.
//!
//!         2. Newline guarantee. The normalized source always ends with a newline so every
//!            parse loop has a terminator to key off.
//!
//!         3. Scanning using a logos lexer. See [lexer_impl](lexer_impl).
//!            Punctuation characters are single-character tokens, everything else is
//!            accumulated into `Text` runs. A backslash turns the next character into
//!            plain text.
//!
//!     There is no grammar knowledge here: a `#` in the middle of a sentence is still a
//!     `Hash` token, and it is up to the parser to treat it as text or skip it.

pub mod detokenizer;
pub mod lexer_impl;
pub mod normalization;
pub mod tokens;

pub use detokenizer::detokenize;
pub use lexer_impl::scan;
pub use normalization::{ensure_source_ends_with_newline, normalize};
pub use tokens::{Token, TokenKind};

/// Tokenize a full source: normalize, guarantee the trailing newline, scan.
pub fn tokenize(source: &str) -> Vec<Token> {
    let normalized = ensure_source_ends_with_newline(&normalize(source));
    let tokens = scan(&normalized);
    tracing::debug!(
        source_len = source.len(),
        token_count = tokens.len(),
        "tokenized source"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::testing::factories::mk_tokens;

    #[test]
    fn test_header_line() {
        let tokens = tokenize("# Hello");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenKind::Hash, "#"),
                (TokenKind::Text, " Hello"),
                (TokenKind::Newline, "\n"),
            ])
        );
    }

    #[test]
    fn test_indented_list_item() {
        let tokens = tokenize("- a\n    - b");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenKind::Hyphen, "-"),
                (TokenKind::Text, " a"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Tab, "\t"),
                (TokenKind::Hyphen, "-"),
                (TokenKind::Text, " b"),
                (TokenKind::Newline, "\n"),
            ])
        );
    }

    #[test]
    fn test_soft_break_marker() {
        let tokens = tokenize("line  \nnext");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenKind::Text, "line"),
                (TokenKind::CarriageReturn, "\r"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Text, "next"),
                (TokenKind::Newline, "\n"),
            ])
        );
    }

    #[test]
    fn test_entities_are_normalized_before_scanning() {
        let tokens = tokenize("a & b &< c");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenKind::Text, "a&amp;b &lt; c"),
                (TokenKind::Newline, "\n"),
            ])
        );
    }

    #[test]
    fn test_round_trip_of_normalized_source() {
        let inputs = vec![
            "# Title\n\nSome *text* here",
            "- one\n\t+ two\n\t\t- three\n",
            "```py\nprint(1)\n```",
            "> quoted [link](example.com) and ![alt](img.png)",
        ];

        for input in inputs {
            let tokens = tokenize(input);
            let expected = ensure_source_ends_with_newline(&normalize(input));
            assert_eq!(
                detokenize(&tokens),
                expected,
                "Round-trip failed for input: {:?}",
                input
            );
        }
    }
}
