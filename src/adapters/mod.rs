//! External integrations
//!
//! Adapters wrap everything outside the process boundary: the
//! S3-compatible object stores the content lives in, and the admin
//! services that own org and site configuration.

pub mod admin;
pub mod store;
