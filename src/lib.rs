// Ferry - Org Content Migration Tool
// Copyright (c) 2026 Ferry Contributors
// Licensed under the MIT License

//! # Ferry - Org Content Migration
//!
//! Ferry migrates an organization from one content platform to another:
//! it provisions the org on the destination, carries over org and site
//! configuration, and copies every content object between S3-compatible
//! stores with per-object failure isolation.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Listing** an org's content bucket page by page
//! - **Copying** objects concurrently, one page at a time, with a
//!   per-object timeout
//! - **Recording** every attempted key as a success or failure in a
//!   results document on disk
//! - **Retrying** exactly the failed keys of a previous run
//!
//! ## Architecture
//!
//! Ferry follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (migrate, provision, state)
//! - [`adapters`] - External integrations (object stores, admin APIs)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ferry::adapters::store::S3Store;
//! use ferry::config::load_config;
//! use ferry::core::migrate::MigrationCoordinator;
//! use ferry::domain::ids::OrgId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("ferry.toml")?;
//!
//!     let source = Arc::new(S3Store::new(&config.source.store).await);
//!     let destination = Arc::new(S3Store::new(&config.destination.store).await);
//!
//!     let mut coordinator = MigrationCoordinator::new(
//!         source,
//!         destination,
//!         config.destination.bucket.clone(),
//!         &config.migration,
//!     );
//!
//!     let status = coordinator.execute(&OrgId::new("acme")?).await?;
//!     println!("Copied {} objects", status.success_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Isolation
//!
//! A failed copy never aborts the run. Each attempt settles into a
//! [`domain::status::CopyOutcome`], and the coordinator records it in the
//! [`domain::status::MigrationStatus`] that is persisted at the end of the
//! run. Only listing and persistence errors are fatal.
//!
//! ## Error Handling
//!
//! Ferry uses the [`domain::errors::FerryError`] type for all errors:
//!
//! ```rust,no_run
//! use ferry::domain::errors::FerryError;
//!
//! fn example() -> Result<(), FerryError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = ferry::config::load_config("ferry.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Ferry uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!(org = "acme", "Starting migration");
//! warn!(site = "docs", "Site config not found, skipping");
//! error!(error = "timeout", "Copy failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
