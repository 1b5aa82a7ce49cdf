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
    #[arg(short, long, default_value = "baler.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Baler configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your CMS settings", self.output);
                println!("  2. Set BALER_CMS_USERNAME and BALER_CMS_PASSWORD if the CMS");
                println!("     requires basic auth (a .env file is picked up automatically)");
                println!("  3. Validate configuration: baler validate-config");
                println!("  4. List content types: baler content-types");
                println!("  5. Run an export: baler export --content-type article");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Baler Configuration File
# CMS content to XLSX archive export tool

[application]
log_level = "info"
operator = "baler"
dry_run = false

[cms]
base_url = "https://cms.example.com"
vendor = "jsonapi"

# Authentication ("basic" or "none")
auth_type = "basic"
username = "${BALER_CMS_USERNAME}"
password = "${BALER_CMS_PASSWORD}"

# TLS settings
tls_verify = true

[cms.query]
content_types = []
page_size = 50

[export]
output_dir = "export"
archive_prefix = "export_content"
sheet_name = "Export"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Baler Configuration File
#
# Baler exports content records from a CMS into one XLSX workbook per
# record, packed into a single zip archive.
#
# This file contains all configuration options with examples and
# explanations.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Operator name stamped into workbook document properties
operator = "baler"

# Dry run mode (query and count, write nothing)
dry_run = false

# ============================================================================
# CMS Configuration
# ============================================================================
[cms]
# Base URL of the CMS instance; also used for canonical record links
base_url = "https://cms.example.com"

# Vendor type (currently only "jsonapi" is supported)
vendor = "jsonapi"

# Authentication type ("basic" or "none")
auth_type = "basic"

# Credentials for basic auth (use environment variables)
username = "${BALER_CMS_USERNAME}"
password = "${BALER_CMS_PASSWORD}"

# TLS/SSL verification. Disable only against development instances.
tls_verify = true

# Request timeout in seconds
timeout_seconds = 30

# Retry settings for CMS requests
[cms.retry]
max_retries = 3
initial_delay_ms = 1000
max_delay_ms = 8000
backoff_multiplier = 2.0

# Query configuration
[cms.query]
# Content type machine names to export. Leave empty and pass
# --content-type on the command line to select per run.
content_types = [
    "article",
    "page",
]

# Records consumed per batch step (1-500)
page_size = 50

# ============================================================================
# Export Output
# ============================================================================
[export]
# Directory the archive is written into
output_dir = "export"

# Archive file name prefix; the run timestamp is appended,
# e.g. export_content_2024_03_05_09_30.zip
archive_prefix = "export_content"

# Worksheet name inside each workbook (max 31 characters)
sheet_name = "Export"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (console logging is always on)
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
