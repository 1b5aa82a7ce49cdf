// Baler - CMS content export tool
// Copyright (c) 2025 Baler Contributors
// Licensed under the MIT License

//! # Baler - CMS content export
//!
//! Baler is a command-line tool that exports content records from a CMS into
//! per-record XLSX workbooks, packed incrementally into a single zip archive
//! for download.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Selecting** content types (bundles) to export, with validation
//! - **Querying** the CMS HTTP API for all matching record ids
//! - **Processing** the queue in bounded pages with per-record progress
//! - **Rendering** one workbook per record (header row + data row)
//! - **Packing** workbooks into an append-only, timestamp-named zip archive
//!
//! ## Architecture
//!
//! Baler follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export loop, workbook rendering, archive)
//! - [`adapters`] - External integrations (CMS HTTP API)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use baler::config::load_config;
//! use baler::core::export::ExportCoordinator;
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("baler.toml")?;
//!
//!     // Create export coordinator
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!     let coordinator = ExportCoordinator::new(config, shutdown_rx)?;
//!
//!     // Execute export
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} records", summary.exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Baler uses the [`domain::BalerError`] type for all errors:
//!
//! ```rust,no_run
//! use baler::domain::{BalerError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = baler::config::load_config("baler.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Baler uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(bundle = "article", "No matching records");
//! error!(error = "timeout", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
