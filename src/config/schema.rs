//! Configuration schema types
//!
//! This module defines the configuration structure for Baler. The root
//! structure maps 1:1 to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Baler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// CMS repository configuration
    pub cms: CmsConfig,

    /// Export output settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BalerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.cms.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Operator name stamped into workbook document properties
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Dry run mode (query and count, write nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        if self.operator.trim().is_empty() {
            return Err("application.operator cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            operator: default_operator(),
            dry_run: false,
        }
    }
}

/// Retry configuration for CMS requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Backoff multiplier
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// CMS repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Base URL of the CMS instance (also used for canonical record links)
    pub base_url: String,

    /// Vendor implementation (currently "jsonapi")
    #[serde(default = "default_vendor")]
    pub vendor: String,

    /// Authentication type ("basic" or "none")
    #[serde(default = "default_auth_type")]
    pub auth_type: String,

    /// Username for basic authentication
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication.
    /// Stored securely in memory and zeroized on drop.
    #[serde(default)]
    pub password: Option<SecretString>,

    /// TLS certificate verification. Disable only against development
    /// instances with self-signed certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,

    /// Query configuration
    #[serde(default)]
    pub query: QueryConfig,
}

impl CmsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("cms.base_url cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "cms.base_url must start with http:// or https://, got: {}",
                self.base_url
            ));
        }

        match self.auth_type.as_str() {
            "basic" => {
                if self.username.is_none() || self.password.is_none() {
                    return Err(
                        "cms.username and cms.password are required for basic auth".to_string()
                    );
                }
            }
            "none" => {}
            other => {
                return Err(format!(
                    "Invalid cms.auth_type '{other}'. Must be 'basic' or 'none'"
                ))
            }
        }

        if self.timeout_seconds == 0 {
            return Err("cms.timeout_seconds must be greater than zero".to_string());
        }

        self.query.validate()?;
        Ok(())
    }
}

/// Query configuration: which content types to export and the page size of
/// the batch loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Content type machine names to export (may be overridden on the CLI)
    #[serde(default)]
    pub content_types: Vec<String>,

    /// Records consumed per batch step (1-500)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl QueryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 || self.page_size > 500 {
            return Err(format!(
                "cms.query.page_size must be between 1 and 500, got: {}",
                self.page_size
            ));
        }
        for name in &self.content_types {
            crate::domain::Bundle::new(name.clone())
                .map_err(|e| format!("cms.query.content_types: {e}"))?;
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            content_types: Vec::new(),
            page_size: default_page_size(),
        }
    }
}

/// Export output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the archive is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Archive file name prefix; the run timestamp is appended
    #[serde(default = "default_archive_prefix")]
    pub archive_prefix: String,

    /// Worksheet name inside each workbook
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        if self.archive_prefix.trim().is_empty()
            || self.archive_prefix.contains('/')
            || self.archive_prefix.contains('\\')
        {
            return Err(format!(
                "export.archive_prefix must be a bare file name prefix, got: {}",
                self.archive_prefix
            ));
        }
        // Worksheet names are capped at 31 characters by the XLSX format
        if self.sheet_name.trim().is_empty() || self.sheet_name.len() > 31 {
            return Err(format!(
                "export.sheet_name must be 1-31 characters, got: {}",
                self.sheet_name
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            archive_prefix: default_archive_prefix(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging (console logging is always on)
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled"
                .to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_operator() -> String {
    "baler".to_string()
}

fn default_vendor() -> String {
    "jsonapi".to_string()
}

fn default_auth_type() -> String {
    "none".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_page_size() -> usize {
    50
}

fn default_output_dir() -> String {
    "export".to_string()
}

fn default_archive_prefix() -> String {
    "export_content".to_string()
}

fn default_sheet_name() -> String {
    "Export".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_max_retries() -> usize {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    8000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}
