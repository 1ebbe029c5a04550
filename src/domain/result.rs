//! Result type alias for Ferry
//!
//! This module provides a convenient Result type alias that uses FerryError
//! as the error type.

use super::errors::FerryError;

/// Result type alias for Ferry operations
///
/// This is a convenience type alias that uses `FerryError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use ferry::domain::result::Result;
/// use ferry::domain::errors::FerryError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(FerryError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, FerryError>;
