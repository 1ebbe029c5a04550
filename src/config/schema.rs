//! Configuration schema types
//!
//! This module defines the configuration structure for Ferry. One
//! [`FerryConfig`] is constructed at process start and passed by reference
//! into each component's constructor; there is no ambient global state.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Ferry configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FerryConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source side: content store and admin service
    pub source: SourceConfig,

    /// Destination side: content store, admin service, and target bucket
    pub destination: DestinationConfig,

    /// Migration engine settings
    #[serde(default)]
    pub migration: MigrationConfig,

    /// Admin API settings
    #[serde(default)]
    pub admin: AdminConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FerryConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.destination.validate()?;
        self.migration.validate()?;
        self.admin.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name (used in logging)
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Connection settings for one S3-compatible object store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Custom endpoint URL (omit for the default AWS endpoint)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Region name
    #[serde(default = "default_region")]
    pub region: String,

    /// Access key ID (omit to use the ambient credential chain)
    #[serde(default)]
    pub access_key_id: Option<String>,

    /// Secret access key, zeroized on drop
    #[serde(default)]
    pub secret_access_key: Option<SecretString>,

    /// Use path-style addressing (required by most non-AWS stores)
    #[serde(default = "default_true")]
    pub force_path_style: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: default_region(),
            access_key_id: None,
            secret_access_key: None,
            force_path_style: true,
        }
    }
}

impl StoreConfig {
    fn validate(&self, side: &str) -> Result<(), String> {
        if let Some(endpoint) = &self.endpoint {
            Url::parse(endpoint)
                .map_err(|e| format!("Invalid {side} store endpoint '{endpoint}': {e}"))?;
        }
        if self.region.trim().is_empty() {
            return Err(format!("{side} store region cannot be empty"));
        }
        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(format!(
                "{side} store must set both access_key_id and secret_access_key, or neither"
            ));
        }
        Ok(())
    }
}

/// Source side configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Admin service base URL (org list, config documents)
    pub admin_url: String,

    /// Content store connection
    #[serde(default)]
    pub store: StoreConfig,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        Url::parse(&self.admin_url)
            .map_err(|e| format!("Invalid source admin_url '{}': {e}", self.admin_url))?;
        self.store.validate("source")
    }
}

/// Destination side configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Admin service base URL
    pub admin_url: String,

    /// The single fixed bucket all migrated content lands in
    pub bucket: String,

    /// Content store connection
    #[serde(default)]
    pub store: StoreConfig,
}

impl DestinationConfig {
    fn validate(&self) -> Result<(), String> {
        Url::parse(&self.admin_url)
            .map_err(|e| format!("Invalid destination admin_url '{}': {e}", self.admin_url))?;
        if self.bucket.trim().is_empty() {
            return Err("destination bucket cannot be empty".to_string());
        }
        self.store.validate("destination")
    }
}

/// Migration engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Listing page size; also bounds per-batch concurrency and the retry
    /// chunk size (1-1000)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Per-object copy timeout in seconds
    #[serde(default = "default_copy_timeout_secs")]
    pub copy_timeout_secs: u64,

    /// Directory status documents are written to
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            copy_timeout_secs: default_copy_timeout_secs(),
            results_dir: default_results_dir(),
        }
    }
}

impl MigrationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 || self.page_size > 1000 {
            return Err(format!(
                "page_size must be between 1 and 1000, got {}",
                self.page_size
            ));
        }
        if self.copy_timeout_secs == 0 {
            return Err("copy_timeout_secs must be greater than 0".to_string());
        }
        if self.results_dir.trim().is_empty() {
            return Err("results_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Admin API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Optional bearer token sent to both admin services
    #[serde(default)]
    pub bearer_token: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_admin_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            request_timeout_secs: default_admin_timeout_secs(),
        }
    }
}

impl AdminConfig {
    fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("admin request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to the console
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory log files are written to
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_log_path(),
            file_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !["daily", "hourly"].contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid file_rotation '{}'. Must be 'daily' or 'hourly'",
                self.file_rotation
            ));
        }
        Ok(())
    }
}

fn default_app_name() -> String {
    "ferry".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    100
}

fn default_copy_timeout_secs() -> u64 {
    30
}

fn default_results_dir() -> String {
    ".".to_string()
}

fn default_admin_timeout_secs() -> u64 {
    30
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
