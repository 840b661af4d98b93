//! Error types and error handling for the uxlex search core.
//!
//! This module defines the error types used throughout the
//! crate. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.
//!
//! Empty outcomes (no tokens left after normalization, nothing scoring
//! above zero, an empty corpus) are not errors and never surface here.

use thiserror::Error;

/// Result type alias for uxlex operations
pub type Result<T> = std::result::Result<T, UxlexError>;

/// Main error type for the uxlex search core
#[derive(Error, Debug)]
pub enum UxlexError {
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown stack: {0}")]
    UnknownStack(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Source error: {0}")]
    SourceError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl UxlexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, UxlexError::SourceNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            UxlexError::UnknownDomain(_)
                | UxlexError::UnknownStack(_)
                | UxlexError::InvalidQuery(_)
                | UxlexError::ConfigError(_)
        )
    }
}
