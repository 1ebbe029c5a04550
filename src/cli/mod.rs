//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Ferry using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Ferry - org content migration tool
#[derive(Parser, Debug)]
#[command(name = "ferry")]
#[command(version, about, long_about = None)]
#[command(author = "Ferry Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ferry.toml", env = "FERRY_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FERRY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full migration for an org (settings, then content)
    Migrate(commands::migrate::MigrateArgs),

    /// Retry the failed copies of a previous migrate run
    Retry(commands::retry::RetryArgs),

    /// Show a run's persisted success/failure counts
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
