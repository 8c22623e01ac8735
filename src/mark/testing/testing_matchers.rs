//! Text matching utilities for AST assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Panic with the context path when `actual` does not match
    pub fn assert(&self, actual: &str, context: &str) {
        let (verb, expected) = match self {
            TextMatch::Exact(expected) => ("be", expected),
            TextMatch::StartsWith(prefix) => ("start with", prefix),
            TextMatch::Contains(substring) => ("contain", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected text to {} '{}', but got '{}'",
            context,
            verb,
            expected,
            actual
        );
    }
}
