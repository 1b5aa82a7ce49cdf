//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BalerConfig;
use crate::domain::errors::BalerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BalerConfig
/// 4. Applies environment variable overrides (BALER_* prefix)
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
/// use baler::config::load_config;
///
/// let config = load_config("baler.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BalerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BalerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BalerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: BalerConfig = toml::from_str(&contents)
        .map_err(|e| BalerError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| BalerError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so commented-out examples don't force
/// variables to exist.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

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
                    let placeholder = format!("${{{var_name}}}");
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
        return Err(BalerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the BALER_* prefix
///
/// Variables follow the pattern BALER_<SECTION>_<KEY>,
/// e.g. BALER_CMS_BASE_URL, BALER_EXPORT_OUTPUT_DIR.
fn apply_env_overrides(config: &mut BalerConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("BALER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("BALER_APPLICATION_OPERATOR") {
        config.application.operator = val;
    }
    if let Ok(val) = std::env::var("BALER_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // CMS overrides
    if let Ok(val) = std::env::var("BALER_CMS_BASE_URL") {
        config.cms.base_url = val;
    }
    if let Ok(val) = std::env::var("BALER_CMS_VENDOR") {
        config.cms.vendor = val;
    }
    if let Ok(val) = std::env::var("BALER_CMS_AUTH_TYPE") {
        config.cms.auth_type = val;
    }
    if let Ok(val) = std::env::var("BALER_CMS_USERNAME") {
        config.cms.username = Some(val);
    }
    if let Ok(val) = std::env::var("BALER_CMS_PASSWORD") {
        config.cms.password = Some(crate::config::secret_string(val));
    }
    if let Ok(val) = std::env::var("BALER_CMS_TLS_VERIFY") {
        config.cms.tls_verify = val.parse().unwrap_or(true);
    }

    // Query overrides
    if let Ok(val) = std::env::var("BALER_CMS_QUERY_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.cms.query.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("BALER_CMS_QUERY_CONTENT_TYPES") {
        config.cms.query.content_types = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    // Export overrides
    if let Ok(val) = std::env::var("BALER_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("BALER_EXPORT_ARCHIVE_PREFIX") {
        config.export.archive_prefix = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("BALER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BALER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
