//! Command implementations

pub mod init;
pub mod migrate;
pub mod retry;
pub mod status;
pub mod validate;
