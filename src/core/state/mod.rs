//! Run status persistence

pub mod store;

pub use store::ResultStore;
