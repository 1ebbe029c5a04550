//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FerryConfig;
use crate::config::secret::secret_string;
use crate::domain::errors::FerryError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FerryConfig
/// 4. Applies environment variable overrides (FERRY_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use ferry::config::load_config;
///
/// let config = load_config("ferry.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FerryConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FerryError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FerryError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    let mut config: FerryConfig = toml::from_str(&contents)
        .map_err(|e| FerryError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        FerryError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
        FerryError::Configuration(format!("Internal substitution pattern error: {e}"))
    })?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Don't touch env vars inside comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FerryError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the FERRY_* prefix
///
/// Environment variables follow the pattern: FERRY_<SECTION>_<KEY>
/// For example: FERRY_SOURCE_ADMIN_URL, FERRY_MIGRATION_PAGE_SIZE
fn apply_env_overrides(config: &mut FerryConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("FERRY_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Source overrides
    if let Ok(val) = std::env::var("FERRY_SOURCE_ADMIN_URL") {
        config.source.admin_url = val;
    }
    if let Ok(val) = std::env::var("FERRY_SOURCE_ENDPOINT") {
        config.source.store.endpoint = Some(val);
    }
    if let Ok(val) = std::env::var("FERRY_SOURCE_REGION") {
        config.source.store.region = val;
    }
    if let Ok(val) = std::env::var("FERRY_SOURCE_ACCESS_KEY_ID") {
        config.source.store.access_key_id = Some(val);
    }
    if let Ok(val) = std::env::var("FERRY_SOURCE_SECRET_ACCESS_KEY") {
        config.source.store.secret_access_key = Some(secret_string(val));
    }

    // Destination overrides
    if let Ok(val) = std::env::var("FERRY_DESTINATION_ADMIN_URL") {
        config.destination.admin_url = val;
    }
    if let Ok(val) = std::env::var("FERRY_DESTINATION_BUCKET") {
        config.destination.bucket = val;
    }
    if let Ok(val) = std::env::var("FERRY_DESTINATION_ENDPOINT") {
        config.destination.store.endpoint = Some(val);
    }
    if let Ok(val) = std::env::var("FERRY_DESTINATION_REGION") {
        config.destination.store.region = val;
    }
    if let Ok(val) = std::env::var("FERRY_DESTINATION_ACCESS_KEY_ID") {
        config.destination.store.access_key_id = Some(val);
    }
    if let Ok(val) = std::env::var("FERRY_DESTINATION_SECRET_ACCESS_KEY") {
        config.destination.store.secret_access_key = Some(secret_string(val));
    }

    // Migration overrides
    if let Ok(val) = std::env::var("FERRY_MIGRATION_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.migration.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("FERRY_MIGRATION_COPY_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.migration.copy_timeout_secs = secs;
        }
    }
    if let Ok(val) = std::env::var("FERRY_MIGRATION_RESULTS_DIR") {
        config.migration.results_dir = val;
    }

    // Admin overrides
    if let Ok(val) = std::env::var("FERRY_ADMIN_BEARER_TOKEN") {
        config.admin.bearer_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("FERRY_ADMIN_REQUEST_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.admin.request_timeout_secs = secs;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("FERRY_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("FERRY_LOGGING_FILE_PATH") {
        config.logging.file_path = val;
    }
}
