//! Configuration management for Ferry.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Ferry uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `FERRY_*` environment variable overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! admin_url = "https://admin.source.example"
//!
//! [source.store]
//! endpoint = "https://s3.source.example"
//! access_key_id = "${FERRY_SOURCE_ACCESS_KEY_ID}"
//! secret_access_key = "${FERRY_SOURCE_SECRET_ACCESS_KEY}"
//!
//! [destination]
//! admin_url = "https://admin.dest.example"
//! bucket = "dest-content"
//!
//! [migration]
//! page_size = 100
//! copy_timeout_secs = 30
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ferry::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("ferry.toml")?;
//! println!("Destination bucket: {}", config.destination.bucket);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    AdminConfig, ApplicationConfig, DestinationConfig, FerryConfig, LoggingConfig,
    MigrationConfig, SourceConfig, StoreConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
