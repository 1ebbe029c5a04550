//! Status command implementation
//!
//! Reads a persisted results document and prints a summary of the run.

use crate::config::load_config;
use crate::core::state::ResultStore;
use crate::domain::errors::FerryError;
use crate::domain::ids::OrgId;
use crate::domain::status::RunMode;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Organization to show results for
    pub org: String,

    /// Which run to inspect: migrate or retry
    #[arg(long, default_value = "migrate")]
    pub mode: String,

    /// List the keys of failed objects
    #[arg(long)]
    pub failed: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
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

        let mode = match self.mode.parse::<RunMode>() {
            Ok(mode) => mode,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let store = ResultStore::new(&config.migration.results_dir);
        let status = match store.load(&org, mode) {
            Ok(status) => status,
            Err(FerryError::StatusNotFound { org }) => {
                println!("No {} results found for {org}.", mode.as_str());
                return Ok(1);
            }
            Err(e) => {
                eprintln!("Failed to read results: {e}");
                return Ok(5);
            }
        };

        println!("Results for {org} ({})", mode.as_str());
        println!("  Attempted: {}", status.attempted());
        println!("  Successes: {}", status.success_count());
        println!("  Failures:  {}", status.failed_count());

        if self.failed && !status.failed.is_empty() {
            println!("Failed objects:");
            for key in &status.failed {
                println!("  {key}");
            }
        }

        Ok(0)
    }
}
