//! Error types for the grid engine.
//!
//! This module defines the centralized error type [`GridError`] and a type alias
//! [`Result`] used throughout the crate. Malformed row data never produces an
//! error: missing values render empty and unknown keys are filtered out. Errors
//! are reserved for bad configuration, unreadable files, and filter rules or
//! events that cannot be interpreted at all.

use thiserror::Error;

/// The main error type for grid operations.
///
/// # Examples
///
/// ```
/// use gridview::GridError;
///
/// fn validate_page_size(size: usize) -> Result<(), GridError> {
///     if size == 0 {
///         return Err(GridError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum GridError {
    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A field definition list could not be decoded.
    #[error("Field definition error: {0}")]
    Definitions(String),

    /// A filter rule uses an operator the field's type does not allow.
    #[error("Operator `{operator}` is not supported for field `{field_key}` of type {field_type}")]
    UnsupportedOperator {
        /// Key of the field the rule targets.
        field_key: String,
        /// Operator name as written in the rule.
        operator: String,
        /// Type tag of the targeted field.
        field_type: String,
    },

    /// A filter rule's operand has the wrong shape for its operator.
    #[error("Invalid filter on `{field_key}`: {reason}")]
    InvalidFilter {
        /// Key of the field the rule targets.
        field_key: String,
        /// What is wrong with the operand.
        reason: String,
    },

    /// A filter rule or sort names a field that is not defined.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// An input event carried data that cannot be interpreted.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

/// A specialized `Result` type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
