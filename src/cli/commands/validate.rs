//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Ferry configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (load_config also validates)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Source Admin: {}", config.source.admin_url);
        println!(
            "  Source Endpoint: {}",
            config.source.store.endpoint.as_deref().unwrap_or("(default)")
        );
        println!("  Destination Admin: {}", config.destination.admin_url);
        println!(
            "  Destination Endpoint: {}",
            config
                .destination
                .store
                .endpoint
                .as_deref()
                .unwrap_or("(default)")
        );
        println!("  Destination Bucket: {}", config.destination.bucket);
        println!("  Page Size: {}", config.migration.page_size);
        println!("  Copy Timeout: {}s", config.migration.copy_timeout_secs);
        println!("  Results Directory: {}", config.migration.results_dir);
        println!();
        Ok(0)
    }
}
