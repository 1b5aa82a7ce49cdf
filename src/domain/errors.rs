//! Domain error types
//!
//! This module defines the error hierarchy for Baler. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Baler error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BalerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CMS repository errors
    #[error("CMS error: {0}")]
    Cms(#[from] CmsError),

    /// Archive output errors
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors (e.g. no content types selected)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Spreadsheet rendering errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// CMS-specific errors
///
/// Errors that occur when talking to the CMS HTTP API. These don't expose
/// the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Failed to connect to the CMS
    #[error("Failed to connect to CMS: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the CMS
    #[error("Invalid response from CMS: {0}")]
    InvalidResponse(String),

    /// Node not found
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Archive-specific errors
///
/// Errors that occur while creating or appending to the zip archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Failed to create the archive file
    #[error("Failed to create archive {path}: {message}")]
    CreateFailed { path: String, message: String },

    /// Failed to reopen an existing archive for appending
    #[error("Failed to open archive {path} for append: {message}")]
    AppendFailed { path: String, message: String },

    /// Failed to write an entry
    #[error("Failed to write archive entry {entry}: {message}")]
    EntryFailed { entry: String, message: String },

    /// Failed to finalize the archive
    #[error("Failed to finalize archive {path}: {message}")]
    FinalizeFailed { path: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for BalerError {
    fn from(err: std::io::Error) -> Self {
        BalerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BalerError {
    fn from(err: serde_json::Error) -> Self {
        BalerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BalerError {
    fn from(err: toml::de::Error) -> Self {
        BalerError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from spreadsheet writer errors
impl From<rust_xlsxwriter::XlsxError> for BalerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        BalerError::Spreadsheet(err.to_string())
    }
}
