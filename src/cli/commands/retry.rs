//! Retry command implementation
//!
//! Re-attempts the objects recorded as failed by a previous migrate run.

use crate::adapters::store::S3Store;
use crate::config::load_config;
use crate::core::migrate::RetryDriver;
use crate::domain::errors::FerryError;
use crate::domain::ids::OrgId;
use clap::Args;
use std::sync::Arc;

/// Arguments for the retry command
#[derive(Args, Debug)]
pub struct RetryArgs {
    /// Organization to retry failed objects for
    pub org: String,
}

impl RetryArgs {
    /// Execute the retry command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let org = match OrgId::new(self.org.clone()) {
            Ok(org) => org,
            Err(e) => {
                eprintln!("Invalid org: {e}");
                return Ok(2);
            }
        };

        println!("Retrying failed objects for {org}");

        let source: Arc<S3Store> = Arc::new(S3Store::new(&config.source.store).await);
        let destination: Arc<S3Store> = Arc::new(S3Store::new(&config.destination.store).await);

        let mut driver = RetryDriver::new(
            source,
            destination,
            config.destination.bucket.clone(),
            &config.migration,
        );

        let status = match driver.execute(&org).await {
            Ok(status) => status,
            Err(FerryError::StatusNotFound { org }) => {
                println!("No migration results found for {org}; nothing to retry.");
                return Ok(1);
            }
            Err(e) => {
                tracing::error!(error = %e, "Retry failed");
                eprintln!("Retry failed: {e}");
                return Ok(5);
            }
        };

        if status.attempted() == 0 {
            println!("No failed objects recorded; nothing to retry.");
            return Ok(0);
        }

        println!("Successes: {}", status.success_count());
        println!("Failures: {}", status.failed_count());
        println!("Retry complete.");

        if status.is_clean() {
            Ok(0)
        } else {
            Ok(1)
        }
    }
}
