//! Error types for the orderdeck plugin.
//!
//! This module defines the centralized error type [`OrderdeckError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Only setup can fail. Once a list is constructed every scroll, resize, and filter
//! input is clamped into range rather than reported, and an empty search result is a
//! regular state with its own placeholder, not an error.

use thiserror::Error;

/// The main error type for orderdeck operations.
///
/// # Examples
///
/// ```
/// use orderdeck::OrderdeckError;
///
/// fn validate(row_height: usize) -> Result<(), OrderdeckError> {
///     if row_height == 0 {
///         return Err(OrderdeckError::Configuration("row height must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum OrderdeckError {
    /// List geometry or plugin configuration is invalid.
    ///
    /// Raised for a non-positive row height or a negative buffer. There is no
    /// recovery; the list is never built.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for orderdeck operations.
pub type Result<T> = std::result::Result<T, OrderdeckError>;
