//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "ferry.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Ferry configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set FERRY_SOURCE_ACCESS_KEY_ID and FERRY_SOURCE_SECRET_ACCESS_KEY");
                println!("     - Set FERRY_DESTINATION_ACCESS_KEY_ID and FERRY_DESTINATION_SECRET_ACCESS_KEY");
                println!("     - Set FERRY_ADMIN_BEARER_TOKEN");
                println!("  3. Validate configuration: ferry validate-config");
                println!("  4. Run a migration: ferry migrate <org>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Ferry Configuration File
# Org content migration tool

[application]
name = "ferry"
log_level = "info"

[source]
admin_url = "https://admin.old-platform.example.com/api"

[source.store]
endpoint = "https://storage.old-platform.example.com"
region = "us-east-1"
access_key_id = "${FERRY_SOURCE_ACCESS_KEY_ID}"
secret_access_key = "${FERRY_SOURCE_SECRET_ACCESS_KEY}"
force_path_style = true

[destination]
admin_url = "https://admin.new-platform.example.com/api"
bucket = "platform-content"

[destination.store]
endpoint = "https://storage.new-platform.example.com"
region = "us-east-1"
access_key_id = "${FERRY_DESTINATION_ACCESS_KEY_ID}"
secret_access_key = "${FERRY_DESTINATION_SECRET_ACCESS_KEY}"
force_path_style = true

[migration]
# Objects per listing page; also bounds concurrent copies (1-1000)
page_size = 100
copy_timeout_secs = 30
results_dir = "."

[admin]
bearer_token = "${FERRY_ADMIN_BEARER_TOKEN}"
request_timeout_secs = 30

[logging]
file_enabled = false
file_path = "logs"
file_rotation = "daily"
"#
        .to_string()
    }
}
