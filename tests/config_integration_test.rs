//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use ferry::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("FERRY_APPLICATION_LOG_LEVEL");
    std::env::remove_var("FERRY_MIGRATION_PAGE_SIZE");
    std::env::remove_var("FERRY_MIGRATION_RESULTS_DIR");
    std::env::remove_var("FERRY_DESTINATION_BUCKET");
    std::env::remove_var("TEST_FERRY_TOKEN");
    std::env::remove_var("TEST_FERRY_SECRET");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
name = "ferry"
log_level = "debug"

[source]
admin_url = "https://admin.old.example/api"

[source.store]
endpoint = "https://storage.old.example"
region = "eu-west-1"
access_key_id = "source-key"
secret_access_key = "source-secret"
force_path_style = true

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"

[destination.store]
endpoint = "https://storage.new.example"

[migration]
page_size = 250
copy_timeout_secs = 45
results_dir = "/tmp/ferry-results"

[admin]
bearer_token = "abc123"
request_timeout_secs = 15

[logging]
file_enabled = false
file_path = "/tmp/ferry-logs"
file_rotation = "daily"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.name, "ferry");
    assert_eq!(config.application.log_level, "debug");

    assert_eq!(config.source.admin_url, "https://admin.old.example/api");
    assert_eq!(
        config.source.store.endpoint.as_deref(),
        Some("https://storage.old.example")
    );
    assert_eq!(config.source.store.region, "eu-west-1");
    assert_eq!(
        config.source.store.access_key_id.as_deref(),
        Some("source-key")
    );
    assert!(config.source.store.force_path_style);

    assert_eq!(config.destination.bucket, "platform-content");
    assert_eq!(config.destination.store.region, "us-east-1");

    assert_eq!(config.migration.page_size, 250);
    assert_eq!(config.migration.copy_timeout_secs, 45);
    assert_eq!(config.migration.results_dir, "/tmp/ferry-results");

    assert_eq!(config.admin.request_timeout_secs, 15);
    assert!(config.admin.bearer_token.is_some());
}

#[test]
fn test_minimal_config_gets_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[source]
admin_url = "https://admin.old.example/api"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.migration.page_size, 100);
    assert_eq!(config.migration.copy_timeout_secs, 30);
    assert_eq!(config.migration.results_dir, ".");
    assert!(config.source.store.endpoint.is_none());
    assert!(config.admin.bearer_token.is_none());
}

#[test]
fn test_env_var_substitution() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_FERRY_TOKEN", "secret-token-value");

    let toml_content = r#"
[source]
admin_url = "https://admin.old.example/api"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"

[admin]
bearer_token = "${TEST_FERRY_TOKEN}"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    use secrecy::ExposeSecret;
    assert_eq!(
        config
            .admin
            .bearer_token
            .as_ref()
            .map(|t| t.expose_secret().to_string()),
        Some("secret-token-value".to_string())
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails_with_its_name() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[source]
admin_url = "https://admin.old.example/api"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"

[admin]
bearer_token = "${TEST_FERRY_TOKEN}"
"#;

    let temp_file = write_config(toml_content);
    let err = load_config(temp_file.path()).expect_err("should fail");
    assert!(err.to_string().contains("TEST_FERRY_TOKEN"));
}

#[test]
fn test_env_var_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("FERRY_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("FERRY_MIGRATION_PAGE_SIZE", "500");
    std::env::set_var("FERRY_DESTINATION_BUCKET", "other-bucket");

    let toml_content = r#"
[application]
log_level = "info"

[source]
admin_url = "https://admin.old.example/api"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.migration.page_size, 500);
    assert_eq!(config.destination.bucket, "other-bucket");

    cleanup_env_vars();
}

#[test]
fn test_page_size_out_of_range_is_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for page_size in ["0", "1001"] {
        let toml_content = format!(
            r#"
[source]
admin_url = "https://admin.old.example/api"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"

[migration]
page_size = {page_size}
"#
        );

        let temp_file = write_config(&toml_content);
        assert!(
            load_config(temp_file.path()).is_err(),
            "page_size {page_size} should be rejected"
        );
    }
}

#[test]
fn test_invalid_admin_url_is_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[source]
admin_url = "not a url"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"
"#;

    let temp_file = write_config(toml_content);
    assert!(load_config(temp_file.path()).is_err());
}

#[test]
fn test_credentials_must_come_in_pairs() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[source]
admin_url = "https://admin.old.example/api"

[source.store]
access_key_id = "key-without-secret"

[destination]
admin_url = "https://admin.new.example/api"
bucket = "platform-content"
"#;

    let temp_file = write_config(toml_content);
    assert!(load_config(temp_file.path()).is_err());
}
