//! Result type alias for Baler operations

use super::errors::BalerError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, BalerError>;
