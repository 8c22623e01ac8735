//! Property-based tests for the mark tokenizer
//!
//! The tokenizer must accept any input, always terminate the stream with a newline and,
//! for sources without escapes, give back the normalized source when detokenized.

use mark::mark::formats::RenderOptions;
use mark::mark::lexing::{
    detokenize, ensure_source_ends_with_newline, normalize, tokenize, TokenKind,
};
use mark::mark::parsing::parse;
use mark::mark::processor::compile;
use proptest::prelude::*;

/// Text built from every character class the tokenizer distinguishes, minus backslashes
fn mark_text_strategy() -> impl Strategy<Value = String> {
    "[a-z #\\-+*`!\\[\\]()<>\n\t&]{1,60}"
}

/// Lines that start with block markers, to push the parser through every branch
fn mark_document_strategy() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "[a-z ]{1,12}",
        "#{1,3} [a-z]{1,8}",
        "(\t){0,3}[-+] [a-z*]{0,8}",
        "> [a-z]{1,8}",
        Just("```".to_string()),
        Just("---".to_string()),
        Just(String::new()),
        "\\[[a-z]{1,5}\\]\\([a-z.]{1,8}\\)",
    ];
    prop::collection::vec(line, 1..12)
        .prop_map(|lines| lines.join("\n"))
        .prop_filter("source must not be empty", |s| !s.is_empty())
}

proptest! {
    #[test]
    fn test_tokenize_round_trips_normalized_source(input in mark_text_strategy()) {
        let tokens = tokenize(&input);
        let expected = ensure_source_ends_with_newline(&normalize(&input));
        prop_assert_eq!(detokenize(&tokens), expected);
    }

    #[test]
    fn test_stream_ends_with_newline(input in mark_text_strategy()) {
        let tokens = tokenize(&input);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Newline));
    }

    #[test]
    fn test_punctuation_tokens_are_single_characters(input in mark_text_strategy()) {
        for token in tokenize(&input) {
            if token.kind.is_punctuation() {
                prop_assert_eq!(token.raw.chars().count(), 1, "token {:?}", token);
            } else {
                prop_assert!(!token.raw.is_empty());
            }
        }
    }

    #[test]
    fn test_text_runs_are_maximal(input in mark_text_strategy()) {
        let tokens = tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].kind == TokenKind::Text && pair[1].kind == TokenKind::Text),
                "adjacent text tokens: {:?}",
                pair
            );
        }
    }

    #[test]
    fn test_parse_accepts_any_token_stream(input in mark_text_strategy()) {
        let tokens = tokenize(&input);
        let _ = parse(&tokens);
    }

    #[test]
    fn test_compile_accepts_structured_documents(input in mark_document_strategy()) {
        let result = compile(&input, &RenderOptions::default());
        prop_assert!(result.is_ok(), "failed to compile: {:?}", input);
    }
}
