//! Business logic
//!
//! - [`migrate`] - the content migration engine (listing, copying, retry)
//! - [`provision`] - org settings migration via the admin services
//! - [`state`] - status document persistence

pub mod migrate;
pub mod provision;
pub mod state;
