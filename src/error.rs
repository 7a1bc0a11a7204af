//! Error types for the Receipt Processor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while scoring and serving receipts.

use thiserror::Error;

/// The main error type for the Receipt Processor.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use receipt_processor::error::EngineError;
///
/// let error = EngineError::InvalidReceipt {
///     field: "total".to_string(),
///     message: "expected a two-decimal amount".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid receipt field 'total': expected a two-decimal amount"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A receipt field was missing or could not be parsed.
    ///
    /// This is the only error the scoring engine produces.
    #[error("Invalid receipt field '{field}': {message}")]
    InvalidReceipt {
        /// The field that was invalid (e.g. `items[2].price`).
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No score has been stored under the given receipt id.
    #[error("No receipt found for id: {id}")]
    ReceiptNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidReceipt`] for the given field.
    pub fn invalid_receipt(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidReceipt {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an [`EngineError::InvalidReceipt`] for a required field that was absent.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::invalid_receipt(field, "required field is missing")
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
