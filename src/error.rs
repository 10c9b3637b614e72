//! Error types for the fallible edges (settings and browser setup)
//!
//! The simulation itself cannot fail; a collision is a game event, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("element `{0}` has an unexpected type")]
    WrongElementType(String),

    #[error("2d canvas context unavailable")]
    ContextUnavailable,

    #[error("javascript error: {0}")]
    Js(String),
}
