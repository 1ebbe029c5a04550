//! Object store backends
//!
//! The migration engine consumes the [`ObjectStore`] trait; this module
//! provides the S3-compatible production backend and an in-memory backend
//! used by the test suites.

pub mod memory;
pub mod s3;
pub mod traits;

pub use memory::MemoryStore;
pub use s3::S3Store;
pub use traits::{ObjectPage, ObjectStore, StoredObject};
