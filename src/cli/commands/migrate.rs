//! Migrate command implementation
//!
//! Runs a full migration for one org: settings first (provisioning, org
//! config, site configs), then the content engine.

use crate::adapters::admin::AdminClient;
use crate::adapters::store::S3Store;
use crate::config::load_config;
use crate::core::migrate::MigrationCoordinator;
use crate::core::provision::SettingsMigrator;
use crate::domain::ids::OrgId;
use clap::Args;
use std::sync::Arc;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Organization to migrate
    pub org: String,

    /// Migrate settings only; skip the content copy
    #[arg(long)]
    pub config_only: bool,

    /// Migrate content only; skip org provisioning and config migration
    #[arg(long, conflicts_with = "config_only")]
    pub content_only: bool,
}

impl MigrateArgs {
    /// Execute the migrate command
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

        println!("Migrating {org}");

        if !self.content_only {
            let admin = match AdminClient::new(&config) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create admin client");
                    eprintln!("Failed to connect to admin services: {e}");
                    return Ok(4);
                }
            };

            if let Err(e) = SettingsMigrator::new(admin).run(&org).await {
                tracing::error!(error = %e, "Settings migration failed");
                eprintln!("Settings migration failed: {e}");
                return Ok(5);
            }
        }

        if self.config_only {
            println!("Settings migrated; content copy skipped (--config-only).");
            return Ok(0);
        }

        let source: Arc<S3Store> = Arc::new(S3Store::new(&config.source.store).await);
        let destination: Arc<S3Store> = Arc::new(S3Store::new(&config.destination.store).await);

        let mut coordinator = MigrationCoordinator::new(
            source,
            destination,
            config.destination.bucket.clone(),
            &config.migration,
        );

        let status = match coordinator.execute(&org).await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(error = %e, "Migration failed");
                eprintln!("Migration failed: {e}");
                return Ok(5);
            }
        };

        println!("Successes: {}", status.success_count());
        println!("Failures: {}", status.failed_count());
        println!("Migration complete.");

        if status.is_clean() {
            Ok(0)
        } else {
            println!("Run 'ferry retry {org}' to retry the failed objects.");
            Ok(1)
        }
    }
}
