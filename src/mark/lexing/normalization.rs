//! Source normalization applied before scanning
//!
//! Every replacement is a literal substring pass over the whole input, applied once and
//! in the order below. Later passes see the output of earlier ones, but nothing is
//! iterated to a fixpoint.

/// Ordered replacement table
const REPLACEMENTS: &[(&str, &str)] = &[
    ("    ", "\t"),
    ("  ", "\r"),
    (" & ", "&amp;"),
    ("&<", "&lt;"),
    ("&>", "&gt;"),
];

/// Apply the normalization passes to raw source text.
pub fn normalize(source: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(source.to_string(), |text, (from, to)| text.replace(from, to))
}

/// Ensures the source ends with a newline so every parse loop has a terminator.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if source.ends_with('\n') {
        source.to_string()
    } else {
        format!("{}\n", source)
    }
}
