//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Total number of matching records queued
    pub total_nodes: usize,

    /// Number of records exported into the archive
    pub exported: usize,

    /// Number of records skipped because their workbook failed to render
    pub skipped: usize,

    /// Number of records that failed to load from the CMS
    pub failed: usize,

    /// Duration of the export
    pub duration: Duration,

    /// Whether the run was interrupted by a shutdown signal
    pub interrupted: bool,

    /// Path of the produced archive (absent when nothing was written)
    pub archive_path: Option<PathBuf>,

    /// Errors encountered during export
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Creates a new empty export summary
    pub fn new() -> Self {
        Self {
            total_nodes: 0,
            exported: 0,
            skipped: 0,
            failed: 0,
            duration: Duration::from_secs(0),
            interrupted: false,
            archive_path: None,
            errors: Vec::new(),
        }
    }

    /// Sets the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Adds an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Number of records consumed (exported, skipped or failed)
    pub fn processed(&self) -> usize {
        self.exported + self.skipped + self.failed
    }

    /// Whether the export completed without failures
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.errors.is_empty() && !self.interrupted
    }

    /// Success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_nodes == 0 {
            return 100.0;
        }
        (self.exported as f64 / self.total_nodes as f64) * 100.0
    }

    /// Logs the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_nodes = self.total_nodes,
            exported = self.exported,
            skipped = self.skipped,
            failed = self.failed,
            interrupted = self.interrupted,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            archive = self
                .archive_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "Export completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Connection error (CMS unreachable)
    Connection,
    /// Query error
    Query,
    /// Spreadsheet rendering error
    Spreadsheet,
    /// Archive output error
    Archive,
    /// Configuration error
    Configuration,
    /// Unknown error
    Unknown,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,

    /// Optional context (e.g. node id)
    pub context: Option<String>,
}

impl ExportError {
    /// Creates a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Adds context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new();

        assert_eq!(summary.total_nodes, 0);
        assert_eq!(summary.exported, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.failed, 0);
        assert!(!summary.interrupted);
        assert!(summary.archive_path.is_none());
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_export_summary_with_duration() {
        let summary = ExportSummary::new().with_duration(Duration::from_secs(120));
        assert_eq!(summary.duration, Duration::from_secs(120));
    }

    #[test]
    fn test_export_summary_is_successful() {
        let mut summary = ExportSummary::new();
        summary.total_nodes = 100;
        summary.exported = 100;
        assert!(summary.is_successful());

        summary.failed = 1;
        assert!(!summary.is_successful());

        summary.failed = 0;
        summary.interrupted = true;
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_export_summary_success_rate() {
        let mut summary = ExportSummary::new();
        summary.total_nodes = 100;
        summary.exported = 95;
        assert_eq!(summary.success_rate(), 95.0);

        summary.total_nodes = 0;
        assert_eq!(summary.success_rate(), 100.0);
    }

    #[test]
    fn test_export_summary_processed() {
        let mut summary = ExportSummary::new();
        summary.exported = 4;
        summary.skipped = 2;
        summary.failed = 1;
        assert_eq!(summary.processed(), 7);
    }

    #[test]
    fn test_export_error_with_context() {
        let error = ExportError::new(ExportErrorType::Query, "Query failed".to_string())
            .with_context("bundle=article".to_string());

        assert_eq!(error.error_type, ExportErrorType::Query);
        assert_eq!(error.context, Some("bundle=article".to_string()));
    }
}
