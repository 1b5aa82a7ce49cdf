//! Content types command implementation
//!
//! Lists the content types available on the CMS so the operator can pick
//! what to export.

use crate::adapters::cms::CmsClient;
use crate::config::load_config;
use clap::Args;

/// Arguments for the content-types command
#[derive(Args, Debug)]
pub struct ContentTypesArgs {}

impl ContentTypesArgs {
    /// Execute the content-types command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Listing content types");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let client = match CmsClient::new(config.cms) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create CMS client");
                eprintln!("Failed to create CMS client: {e}");
                return Ok(2);
            }
        };

        let content_types = match client.vendor().list_content_types().await {
            Ok(types) => types,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list content types");
                eprintln!("Failed to list content types: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        if content_types.is_empty() {
            println!("No content types available on {}", client.base_url());
            return Ok(0);
        }

        println!("Content types on {}:", client.base_url());
        println!();
        let width = content_types
            .iter()
            .map(|ct| ct.id.as_str().len())
            .max()
            .unwrap_or(0);
        for ct in &content_types {
            println!("  {:width$}  {}", ct.id.as_str(), ct.label);
        }
        println!();
        println!("{} content type(s)", content_types.len());

        Ok(0)
    }
}
