//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use baler::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("BALER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("BALER_APPLICATION_DRY_RUN");
    std::env::remove_var("BALER_CMS_BASE_URL");
    std::env::remove_var("BALER_CMS_QUERY_PAGE_SIZE");
    std::env::remove_var("BALER_CMS_QUERY_CONTENT_TYPES");
    std::env::remove_var("BALER_EXPORT_OUTPUT_DIR");
    std::env::remove_var("TEST_CMS_PASSWORD");
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
log_level = "debug"
operator = "site admin"
dry_run = true

[cms]
base_url = "https://cms.example.com"
vendor = "jsonapi"
auth_type = "basic"
username = "test_user"
password = "test_pass"
tls_verify = true
timeout_seconds = 60

[cms.retry]
max_retries = 5
initial_delay_ms = 500
max_delay_ms = 4000
backoff_multiplier = 1.5

[cms.query]
content_types = ["article", "page"]
page_size = 25

[export]
output_dir = "/tmp/baler"
archive_prefix = "site_export"
sheet_name = "Content"

[logging]
local_enabled = false
local_path = "/tmp/baler-logs"
local_rotation = "hourly"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Application config
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.application.operator, "site admin");
    assert!(config.application.dry_run);

    // CMS config
    assert_eq!(config.cms.base_url, "https://cms.example.com");
    assert_eq!(config.cms.vendor, "jsonapi");
    assert_eq!(config.cms.username, Some("test_user".to_string()));
    assert_eq!(config.cms.timeout_seconds, 60);
    assert_eq!(config.cms.retry.max_retries, 5);

    // Query config
    assert_eq!(config.cms.query.content_types, vec!["article", "page"]);
    assert_eq!(config.cms.query.page_size, 25);

    // Export config
    assert_eq!(config.export.output_dir, "/tmp/baler");
    assert_eq!(config.export.archive_prefix, "site_export");
    assert_eq!(config.export.sheet_name, "Content");

    // Logging config
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[cms]
base_url = "https://cms.example.com"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.cms.auth_type, "none");
    assert_eq!(config.cms.query.page_size, 50);
    assert!(config.cms.query.content_types.is_empty());
    assert_eq!(config.export.output_dir, "export");
    assert_eq!(config.export.archive_prefix, "export_content");
    assert_eq!(config.export.sheet_name, "Export");
}

#[test]
fn test_env_var_substitution_in_credentials() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_CMS_PASSWORD", "s3cret");

    let toml_content = r#"
[cms]
base_url = "https://cms.example.com"
auth_type = "basic"
username = "editor"
password = "${TEST_CMS_PASSWORD}"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    use secrecy::ExposeSecret;
    assert_eq!(
        config.cms.password.as_ref().unwrap().expose_secret(),
        "s3cret"
    );

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_take_precedence() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("BALER_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("BALER_CMS_QUERY_PAGE_SIZE", "10");
    std::env::set_var("BALER_CMS_QUERY_CONTENT_TYPES", "article, news");
    std::env::set_var("BALER_EXPORT_OUTPUT_DIR", "/tmp/override");

    let toml_content = r#"
[application]
log_level = "info"

[cms]
base_url = "https://cms.example.com"

[cms.query]
page_size = 50
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.cms.query.page_size, 10);
    assert_eq!(config.cms.query.content_types, vec!["article", "news"]);
    assert_eq!(config.export.output_dir, "/tmp/override");

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    // basic auth without credentials
    let toml_content = r#"
[cms]
base_url = "https://cms.example.com"
auth_type = "basic"
"#;

    let temp_file = write_config(toml_content);
    assert!(load_config(temp_file.path()).is_err());
}

#[test]
fn test_password_not_exposed_in_debug() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[cms]
base_url = "https://cms.example.com"
auth_type = "basic"
username = "editor"
password = "super-secret-password"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    let debug_output = format!("{config:?}");
    assert!(!debug_output.contains("super-secret-password"));
}
