//! Admin service integration
//!
//! HTTP client and wire models for the source/destination admin services.

pub mod client;
pub mod models;

pub use client::AdminClient;
pub use models::{MigrationProps, OrgEntry, SiteEntry};
