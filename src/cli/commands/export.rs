//! Export command implementation
//!
//! This module implements the `export` command: validate the content type
//! selection, run the batched export and report the produced archive.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use crate::domain::{BalerError, CmsError};
use clap::Args;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - query and count without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Override content type(s) to export (comma-separated)
    #[arg(long)]
    pub content_type: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Override the page size of the batch loop
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(content_types) = &self.content_type {
            let selection: Vec<String> = content_types
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            tracing::info!(content_types = ?selection, "Overriding content types from CLI");
            config.cms.query.content_types = selection;
        }

        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        if let Some(page_size) = self.page_size {
            tracing::info!(page_size = page_size, "Overriding page size from CLI");
            config.cms.query.page_size = page_size;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        // Validate configuration with overrides applied
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.application.dry_run {
            println!("Export Configuration:");
            println!("  CMS: {}", config.cms.base_url);
            println!(
                "  Content types: {}",
                if config.cms.query.content_types.is_empty() {
                    "(none)".to_string()
                } else {
                    config.cms.query.content_types.join(", ")
                }
            );
            println!("  Page size: {}", config.cms.query.page_size);
            println!("  Output directory: {}", config.export.output_dir);
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Create export coordinator
        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::new(config, shutdown_signal) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        println!("🚀 Starting export...");
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(BalerError::Validation(msg)) => {
                tracing::error!(error = %msg, "Selection validation failed");
                eprintln!("Validation error: {msg}");
                return Ok(2);
            }
            Err(e @ BalerError::Cms(CmsError::ConnectionFailed(_)))
            | Err(e @ BalerError::Cms(CmsError::Timeout(_)))
            | Err(e @ BalerError::Cms(CmsError::AuthenticationFailed(_))) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(4);
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        println!();
        println!("📊 Export Summary:");
        println!("  Matching records: {}", summary.total_nodes);
        println!("  Exported: {}", summary.exported);
        println!("  Skipped: {}", summary.skipped);
        println!("  Failed: {}", summary.failed);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!("  - {:?}: {}", error.error_type, error.message);
                if let Some(context) = &error.context {
                    println!("    Context: {context}");
                }
            }
            println!();
        }

        if let Some(path) = &summary.archive_path {
            println!(
                "Content export file was created, download: {}",
                path.display()
            );
            println!();
        }

        // Determine exit code
        let exit_code = if summary.interrupted {
            println!("⚠️  Export interrupted. The archive holds the pages written so far.");
            tracing::info!("Export interrupted by user signal");
            130 // SIGINT exit code
        } else if summary.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with failures");
            1 // Partial success
        };

        Ok(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            yes: false,
            dry_run: false,
            content_type: None,
            output_dir: None,
            page_size: None,
        };

        assert!(!args.yes);
        assert!(!args.dry_run);
        assert!(args.content_type.is_none());
        assert!(args.output_dir.is_none());
        assert!(args.page_size.is_none());
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            yes: true,
            dry_run: true,
            content_type: Some("article,page".to_string()),
            output_dir: Some("/tmp/exports".to_string()),
            page_size: Some(25),
        };

        assert!(args.yes);
        assert!(args.dry_run);
        assert_eq!(args.content_type, Some("article,page".to_string()));
        assert_eq!(args.page_size, Some(25));
    }
}
