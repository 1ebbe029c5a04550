//! Domain models and types for Ferry.
//!
//! This module contains the core domain models, types, and business rules
//! for the migration engine.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrgId`], [`ObjectKey`], [`PageToken`])
//! - **Run bookkeeping** ([`MigrationStatus`], [`CopyOutcome`], [`RunMode`])
//! - **Error types** ([`FerryError`], [`StoreError`], [`AdminError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Ferry uses the newtype pattern for identifiers to prevent mixing
//! different kinds of strings:
//!
//! ```rust
//! use ferry::domain::{ObjectKey, OrgId};
//!
//! # fn example() -> Result<(), String> {
//! let org = OrgId::new("acme")?;
//! let key = ObjectKey::new("pages/index.html")?;
//!
//! // Bucket and destination-key conventions live on the types
//! assert_eq!(org.source_bucket(), "acme-content");
//! assert_eq!(org.destination_key(&key), "acme/pages/index.html");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod status;

// Re-export commonly used types for convenience
pub use errors::{AdminError, FerryError, StoreError};
pub use ids::{ObjectKey, OrgId, PageToken};
pub use result::Result;
pub use status::{CopyOutcome, MigrationStatus, RunMode};
