//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Baler using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Baler - CMS content export tool
#[derive(Parser, Debug)]
#[command(name = "baler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "baler.toml", env = "BALER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BALER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export selected content types into an XLSX zip archive
    Export(commands::export::ExportArgs),

    /// List the content types available on the CMS
    ContentTypes(commands::content_types::ContentTypesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
