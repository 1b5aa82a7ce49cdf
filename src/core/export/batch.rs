//! Batch processing for the export page loop
//!
//! Each page consumes a bounded slice of the queued node ids: load the
//! record, render its workbook, and append the entry to the archive. A
//! record whose workbook fails to render is logged and skipped; a record
//! that fails to load is counted as failed. Archive failures abort the run.

use crate::adapters::cms::CmsVendor;
use crate::core::archive::ArchiveWriter;
use crate::core::export::progress::BatchProgress;
use crate::core::sheet::{entry_name, SheetRenderer};
use crate::domain::{NodeId, Result};
use std::sync::Arc;

/// Configuration for batch processing
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Records consumed per page
    pub page_size: usize,

    /// Base URL used for canonical record links
    pub base_url: String,

    /// Dry run: load and render, but write nothing
    pub dry_run: bool,
}

/// Result of processing one page
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Records exported into the archive
    pub exported: usize,

    /// Records skipped because rendering failed
    pub skipped: usize,

    /// Records that failed to load
    pub failed: usize,

    /// Errors encountered
    pub errors: Vec<String>,
}

impl BatchResult {
    /// Creates a new empty batch result
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges another batch result into this one
    pub fn merge(&mut self, other: BatchResult) {
        self.exported += other.exported;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.errors.extend(other.errors);
    }
}

/// Batch processor for export pages
pub struct BatchProcessor {
    vendor: Arc<dyn CmsVendor>,
    renderer: SheetRenderer,
    archive: ArchiveWriter,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Creates a new batch processor
    pub fn new(
        vendor: Arc<dyn CmsVendor>,
        renderer: SheetRenderer,
        archive: ArchiveWriter,
        config: BatchConfig,
    ) -> Self {
        Self {
            vendor,
            renderer,
            archive,
            config,
        }
    }

    /// Processes one page of node ids
    ///
    /// At most `page_size` ids are consumed; the caller hands in pages of
    /// that size. Progress advances once per id regardless of outcome so the
    /// loop terminates with processed == total.
    ///
    /// # Errors
    ///
    /// Returns an error only for archive failures; per-record load and
    /// render failures are recorded in the result instead.
    pub async fn process_page(
        &self,
        ids: &[NodeId],
        progress: &mut BatchProgress,
    ) -> Result<BatchResult> {
        let mut result = BatchResult::new();

        if ids.is_empty() {
            tracing::debug!("No nodes to process in page");
            return Ok(result);
        }

        debug_assert!(ids.len() <= self.config.page_size);

        let mut entries: Vec<(String, Vec<u8>)> = Vec::with_capacity(ids.len());

        for id in ids {
            progress.advance();
            tracing::info!("{}", progress.message());

            let record = match self.vendor.fetch_node(*id).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(node_id = %id, error = %e, "Failed to load node");
                    result.failed += 1;
                    result.errors.push(format!("Failed to load node {id}: {e}"));
                    continue;
                }
            };

            match self.renderer.render(&record, &self.config.base_url) {
                Ok(bytes) => {
                    entries.push((entry_name(&record), bytes));
                    result.exported += 1;
                }
                Err(e) => {
                    // Known policy: a record whose workbook cannot be
                    // rendered is skipped without failing the run.
                    tracing::error!(node_id = %id, error = %e, "Failed to render workbook, skipping node");
                    result.skipped += 1;
                }
            }
        }

        if !self.config.dry_run {
            self.archive.append_entries(&entries)?;
        }

        tracing::debug!(
            exported = result.exported,
            skipped = result.skipped,
            failed = result.failed,
            fraction = progress.fraction(),
            "Page complete"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::SheetOptions;
    use crate::domain::{
        Bundle, CmsError, ContentRecord, ContentRecordBuilder, ContentType, NodeUuid,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::fs::File;
    use zip::ZipArchive;

    /// In-memory vendor: ids below 1000 resolve, the rest are missing
    struct StubVendor;

    #[async_trait]
    impl CmsVendor for StubVendor {
        async fn list_content_types(&self) -> crate::domain::Result<Vec<ContentType>> {
            Ok(vec![])
        }

        async fn query_node_ids(
            &self,
            _bundles: &[Bundle],
        ) -> crate::domain::Result<Vec<NodeId>> {
            Ok(vec![])
        }

        async fn fetch_node(&self, id: NodeId) -> crate::domain::Result<ContentRecord> {
            if id.value() >= 1000 {
                return Err(CmsError::NodeNotFound(id.to_string()).into());
            }
            Ok(sample_record(id.value()))
        }

        fn base_url(&self) -> &str {
            "https://cms.example.com"
        }
    }

    fn sample_record(id: u64) -> ContentRecord {
        ContentRecordBuilder::new()
            .id(NodeId::new(id))
            .uuid(NodeUuid::new(format!("uuid-{id}")).unwrap())
            .bundle(Bundle::new("article").unwrap())
            .title(format!("Node {id}"))
            .author_name("editor")
            .author_id(1)
            .created(Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap())
            .published(true)
            .langcode("en")
            .build()
            .unwrap()
    }

    fn processor(archive: ArchiveWriter, dry_run: bool) -> BatchProcessor {
        BatchProcessor::new(
            Arc::new(StubVendor),
            SheetRenderer::new(SheetOptions {
                sheet_name: "Export".to_string(),
                creator: "tester".to_string(),
                exported_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            }),
            archive,
            BatchConfig {
                page_size: 50,
                base_url: "https://cms.example.com".to_string(),
                dry_run,
            },
        )
    }

    #[tokio::test]
    async fn test_process_page_exports_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.zip");
        let processor = processor(ArchiveWriter::new(&path), false);

        let ids = vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)];
        let mut progress = BatchProgress::new(ids.len());
        let result = processor.process_page(&ids, &mut progress).await.unwrap();

        assert_eq!(result.exported, 3);
        assert_eq!(result.failed, 0);
        assert!(progress.is_complete());

        let archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 3);
        let names: Vec<_> = archive.file_names().collect();
        assert!(names.contains(&"node_uuid-2.xlsx"));
    }

    #[tokio::test]
    async fn test_process_page_counts_load_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.zip");
        let processor = processor(ArchiveWriter::new(&path), false);

        let ids = vec![NodeId::new(1), NodeId::new(1001)];
        let mut progress = BatchProgress::new(ids.len());
        let result = processor.process_page(&ids, &mut progress).await.unwrap();

        assert_eq!(result.exported, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.errors.len(), 1);
        assert!(progress.is_complete());

        let archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[tokio::test]
    async fn test_process_page_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.zip");
        let processor = processor(ArchiveWriter::new(&path), true);

        let ids = vec![NodeId::new(1)];
        let mut progress = BatchProgress::new(ids.len());
        let result = processor.process_page(&ids, &mut progress).await.unwrap();

        assert_eq!(result.exported, 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_batch_result_merge() {
        let mut a = BatchResult {
            exported: 2,
            skipped: 1,
            failed: 0,
            errors: vec![],
        };
        let b = BatchResult {
            exported: 3,
            skipped: 0,
            failed: 2,
            errors: vec!["boom".to_string()],
        };
        a.merge(b);

        assert_eq!(a.exported, 5);
        assert_eq!(a.skipped, 1);
        assert_eq!(a.failed, 2);
        assert_eq!(a.errors.len(), 1);
    }
}
