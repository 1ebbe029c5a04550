//! Content migration engine
//!
//! The engine is built from small components wired together by a
//! coordinator per run mode:
//!
//! - [`Lister`] pages through the source store's keys
//! - [`Copier`] transfers one object, converting every failure into data
//! - [`BatchRunner`] runs one page/chunk of copies concurrently behind a
//!   settle barrier
//! - [`MigrationCoordinator`] drives a full run (list, copy, merge, loop)
//! - [`RetryDriver`] replays a prior run's failures in sequential chunks

pub mod batch;
pub mod coordinator;
pub mod copier;
pub mod lister;
pub mod retry;

pub use batch::BatchRunner;
pub use coordinator::MigrationCoordinator;
pub use copier::Copier;
pub use lister::Lister;
pub use retry::RetryDriver;
