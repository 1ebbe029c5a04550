//! Domain error types
//!
//! This module defines the error hierarchy for Ferry. All errors are
//! domain-specific and don't expose third-party types.
//!
//! The split mirrors how failures propagate at runtime:
//! - [`FerryError::Listing`] and [`FerryError::Persistence`] are fatal and
//!   terminate the run.
//! - Per-object copy failures never appear here at all; they are captured
//!   as data in the run status (see [`crate::domain::status::CopyOutcome`]).
//! - [`FerryError::StatusNotFound`] is surfaced on the retry path as
//!   "nothing to retry".

use thiserror::Error;

/// Main Ferry error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum FerryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The listing call itself failed. Fatal: the run aborts and no status
    /// document is written for the attempt.
    #[error("Listing failed: {0}")]
    Listing(String),

    /// The status document could not be written. Fatal: in-memory results
    /// are lost to the operator's view.
    #[error("Failed to persist status document: {0}")]
    Persistence(String),

    /// No prior migrate status exists for the organization
    #[error("No migration status found for org '{org}': nothing to retry")]
    StatusNotFound { org: String },

    /// Object store errors
    #[error("Object store error: {0}")]
    Store(#[from] StoreError),

    /// Admin API errors
    #[error("Admin API error: {0}")]
    Admin(#[from] AdminError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Object store errors
///
/// Errors produced by [`ObjectStore`](crate::adapters::store::ObjectStore)
/// implementations. These don't expose SDK types; the message carries
/// whatever detail the backend provided.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Listing a bucket failed
    #[error("list failed for bucket '{bucket}': {message}")]
    List { bucket: String, message: String },

    /// Fetching an object failed
    #[error("get failed for '{key}': {message}")]
    Get { key: String, message: String },

    /// Writing an object failed
    #[error("put failed for '{key}': {message}")]
    Put { key: String, message: String },

    /// The store client could not be constructed or reached
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Admin API errors
///
/// Errors that occur when talking to the source or destination admin
/// service during org provisioning and config migration.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Failed to reach the admin service
    #[error("failed to connect to admin service: {0}")]
    ConnectionFailed(String),

    /// The organization was not found in the source org list
    #[error("org '{0}' not found in source list")]
    OrgNotFound(String),

    /// Server rejected the request
    #[error("{context}: status {status}")]
    RequestFailed { context: String, status: u16 },

    /// Invalid response body
    #[error("invalid response from admin service: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for FerryError {
    fn from(err: std::io::Error) -> Self {
        FerryError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FerryError {
    fn from(err: serde_json::Error) -> Self {
        FerryError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for FerryError {
    fn from(err: toml::de::Error) -> Self {
        FerryError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        AdminError::ConnectionFailed(err.to_string())
    }
}
