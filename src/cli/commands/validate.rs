//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Baler configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load means a
        // valid configuration
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Operator: {}", config.application.operator);
        println!("  CMS: {}", config.cms.base_url);
        println!("  CMS Vendor: {}", config.cms.vendor);
        println!("  Auth Type: {}", config.cms.auth_type);
        println!(
            "  Content types: {}",
            if config.cms.query.content_types.is_empty() {
                "(selected at export time)".to_string()
            } else {
                config.cms.query.content_types.join(", ")
            }
        );
        println!("  Page size: {}", config.cms.query.page_size);
        println!("  Output directory: {}", config.export.output_dir);
        println!("  Archive prefix: {}", config.export.archive_prefix);
        println!();

        Ok(0)
    }
}
