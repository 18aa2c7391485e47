//! Error types for the non-factory surfaces (area spec parsing, rendering).
//!
//! The factory itself is total and never produces these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestkitError {
    #[error("invalid area spec '{spec}': {reason}")]
    InvalidAreaSpec { spec: String, reason: String },

    #[error("unknown output format '{0}' (expected toml or json)")]
    UnknownFormat(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::ser::Error> for TestkitError {
    fn from(e: toml::ser::Error) -> Self {
        TestkitError::Serialize(e.to_string())
    }
}

impl From<serde_json::Error> for TestkitError {
    fn from(e: serde_json::Error) -> Self {
        TestkitError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TestkitError>;
