//! Detokenizer for the mark dialect
//!
//! Concatenates token raw values back into a string. For sources without escapes this
//! reproduces the normalized source exactly, which is what the round-trip tests check.

use super::tokens::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.raw.as_str()).collect()
}
