//! Export coordinator - main orchestrator for the export process
//!
//! This module coordinates the entire export workflow: selection validation,
//! node id query, the paginated batch loop, archive naming and the summary
//! report.

use crate::adapters::cms::CmsClient;
use crate::config::BalerConfig;
use crate::core::archive::{archive_file_name, ArchiveWriter};
use crate::core::export::batch::{BatchConfig, BatchProcessor};
use crate::core::export::progress::BatchProgress;
use crate::core::export::summary::{ExportError, ExportErrorType, ExportSummary};
use crate::core::sheet::{SheetOptions, SheetRenderer};
use crate::domain::{BalerError, Bundle, Result};
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;
use tokio::sync::watch;

/// Export coordinator
pub struct ExportCoordinator {
    config: BalerConfig,
    cms: CmsClient,
    shutdown: watch::Receiver<bool>,
}

impl ExportCoordinator {
    /// Creates a new export coordinator
    pub fn new(config: BalerConfig, shutdown: watch::Receiver<bool>) -> Result<Self> {
        let cms = CmsClient::new(config.cms.clone())?;
        Ok(Self {
            config,
            cms,
            shutdown,
        })
    }

    /// Creates a coordinator around an existing client (used by tests)
    pub fn with_client(
        config: BalerConfig,
        cms: CmsClient,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            cms,
            shutdown,
        }
    }

    /// Executes the export
    ///
    /// This is the main entry point for the export process. It:
    /// 1. Validates configuration and the content type selection
    /// 2. Queries the ids of all matching records
    /// 3. Consumes the queue page by page: load record, render workbook,
    ///    append archive entry, report progress
    /// 4. Generates the summary report
    ///
    /// # Errors
    ///
    /// Returns `BalerError::Validation` when the selection is empty or names
    /// unknown content types, and propagates CMS query and archive failures.
    /// Per-record load/render failures are recorded in the summary instead.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let mut summary = ExportSummary::new();

        tracing::info!("Starting export process");

        if let Err(e) = self.config.validate() {
            summary.add_error(ExportError::new(ExportErrorType::Configuration, e));
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let bundles = self.resolve_selection().await?;

        let node_ids = self.cms.vendor().query_node_ids(&bundles).await?;
        summary.total_nodes = node_ids.len();

        tracing::info!(
            bundle_count = bundles.len(),
            node_count = node_ids.len(),
            "Queued matching records"
        );

        if node_ids.is_empty() {
            tracing::warn!("No records match the selected content types");
            summary = summary.with_duration(start_time.elapsed());
            summary.log_summary();
            return Ok(summary);
        }

        let file_name = archive_file_name(&self.config.export.archive_prefix, started_at);
        let archive_path = Path::new(&self.config.export.output_dir).join(file_name);
        let archive = ArchiveWriter::new(&archive_path);

        let renderer = SheetRenderer::new(SheetOptions {
            sheet_name: self.config.export.sheet_name.clone(),
            creator: self.config.application.operator.clone(),
            exported_at: started_at,
        });

        let dry_run = self.config.application.dry_run;
        if dry_run {
            tracing::info!("Dry run enabled - no files will be written");
        }

        let page_size = self.config.cms.query.page_size;
        let processor = BatchProcessor::new(
            self.cms.vendor().clone(),
            renderer,
            archive,
            BatchConfig {
                page_size,
                base_url: self.config.cms.base_url.clone(),
                dry_run,
            },
        );

        let mut progress = BatchProgress::new(node_ids.len());

        for page in node_ids.chunks(page_size) {
            if *self.shutdown.borrow() {
                tracing::warn!(
                    processed = progress.processed(),
                    total = progress.total(),
                    "Shutdown requested, abandoning remaining pages"
                );
                summary.interrupted = true;
                break;
            }

            // Archive failures abort the run; per-record failures are
            // folded into the batch result.
            let result = processor.process_page(page, &mut progress).await?;
            summary.exported += result.exported;
            summary.skipped += result.skipped;
            summary.failed += result.failed;
            for message in result.errors {
                summary.add_error(ExportError::new(ExportErrorType::Query, message));
            }

            tracing::info!(
                processed = progress.processed(),
                total = progress.total(),
                fraction = format!("{:.2}", progress.fraction()),
                "Completed page"
            );
        }

        if !dry_run && summary.exported > 0 {
            summary.archive_path = Some(archive_path);
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Validates the configured content type selection against the CMS
    ///
    /// # Errors
    ///
    /// Returns `BalerError::Validation` when nothing is selected, a name is
    /// not a valid machine name, or a selected type does not exist.
    async fn resolve_selection(&self) -> Result<Vec<Bundle>> {
        let selection = &self.config.cms.query.content_types;

        if selection.is_empty() {
            return Err(BalerError::Validation(
                "No content types selected".to_string(),
            ));
        }

        let mut bundles = Vec::with_capacity(selection.len());
        for name in selection {
            bundles.push(Bundle::new(name.clone()).map_err(BalerError::Validation)?);
        }

        let available = self.cms.vendor().list_content_types().await?;
        let known: HashSet<&str> = available.iter().map(|ct| ct.id.as_str()).collect();

        let unknown: Vec<&str> = bundles
            .iter()
            .map(Bundle::as_str)
            .filter(|name| !known.contains(name))
            .collect();

        if !unknown.is_empty() {
            let mut names: Vec<&str> = known.into_iter().collect();
            names.sort_unstable();
            return Err(BalerError::Validation(format!(
                "Unknown content types: {}. Available: {}",
                unknown.join(", "),
                names.join(", ")
            )));
        }

        Ok(bundles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cms::CmsVendor;
    use crate::config::{
        ApplicationConfig, CmsConfig, ExportConfig, LoggingConfig, QueryConfig, RetryConfig,
    };
    use crate::domain::{CmsError, ContentRecord, ContentType, NodeId};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct TypesOnlyVendor;

    #[async_trait]
    impl CmsVendor for TypesOnlyVendor {
        async fn list_content_types(&self) -> crate::domain::Result<Vec<ContentType>> {
            Ok(vec![
                ContentType::new(Bundle::new("article").unwrap(), "Article"),
                ContentType::new(Bundle::new("page").unwrap(), "Basic page"),
            ])
        }

        async fn query_node_ids(
            &self,
            _bundles: &[Bundle],
        ) -> crate::domain::Result<Vec<NodeId>> {
            Ok(vec![])
        }

        async fn fetch_node(&self, id: NodeId) -> crate::domain::Result<ContentRecord> {
            Err(CmsError::NodeNotFound(id.to_string()).into())
        }

        fn base_url(&self) -> &str {
            "https://cms.example.com"
        }
    }

    fn config_with_selection(content_types: Vec<String>) -> BalerConfig {
        BalerConfig {
            application: ApplicationConfig::default(),
            cms: CmsConfig {
                base_url: "https://cms.example.com".to_string(),
                vendor: "jsonapi".to_string(),
                auth_type: "none".to_string(),
                username: None,
                password: None,
                tls_verify: true,
                timeout_seconds: 5,
                retry: RetryConfig::default(),
                query: QueryConfig {
                    content_types,
                    page_size: 50,
                },
            },
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    fn coordinator(content_types: Vec<String>) -> ExportCoordinator {
        let (_tx, rx) = watch::channel(false);
        ExportCoordinator::with_client(
            config_with_selection(content_types),
            CmsClient::from_vendor(Arc::new(TypesOnlyVendor)),
            rx,
        )
    }

    #[tokio::test]
    async fn test_empty_selection_is_a_validation_error() {
        let result = coordinator(vec![]).execute_export().await;
        assert!(matches!(result, Err(BalerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unknown_selection_is_a_validation_error() {
        let result = coordinator(vec!["event".to_string()]).execute_export().await;
        match result {
            Err(BalerError::Validation(msg)) => {
                assert!(msg.contains("event"));
                assert!(msg.contains("article"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_selection_with_no_matches_completes_empty() {
        let summary = coordinator(vec!["article".to_string()])
            .execute_export()
            .await
            .unwrap();

        assert_eq!(summary.total_nodes, 0);
        assert_eq!(summary.exported, 0);
        assert!(summary.archive_path.is_none());
        assert!(summary.is_successful());
    }
}
