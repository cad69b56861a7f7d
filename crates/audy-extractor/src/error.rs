//! Error types for the Extractor
//!
//! Malformed or unrecognized log text is never an error; it only yields
//! fewer sources. These variants cover misuse of the API.

use thiserror::Error;

/// Result type alias for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Errors that can occur when calling the extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Input is neither a string nor a sequence of strings
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
