//! Error types for the mark pipeline

use thiserror::Error;

/// Errors surfaced by the public entry points
///
/// Parsing itself never fails: malformed constructs are handled best-effort and
/// logged. Only the conditions below are reported to the caller.
#[derive(Debug, Error)]
pub enum MarkError {
    #[error("Length of markdown source is zero.")]
    EmptySource,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<serde_json::Error> for MarkError {
    fn from(err: serde_json::Error) -> Self {
        MarkError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for MarkError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarkError>;
