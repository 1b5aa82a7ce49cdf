//! Configuration management
//!
//! TOML-based configuration with environment variable substitution,
//! BALER_* overrides and per-section validation.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BalerConfig, CmsConfig, ExportConfig, LoggingConfig, QueryConfig,
    RetryConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
