//! Token stream dumps

use crate::mark::error::Result;
use crate::mark::lexing::Token;

const SEPARATOR_WIDTH: usize = 25;

/// One `KIND  ->  "raw"` line per token, closed by a separator line
pub fn to_simple_str(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&token.to_string());
        output.push('\n');
    }
    output.push_str(&"=".repeat(SEPARATOR_WIDTH));
    output.push('\n');
    output
}

pub fn to_json_str(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
