//! Incremental zip archive output
//!
//! The export appends workbook entries into a single archive across batch
//! steps. The archive is opened (or append-opened when it already exists)
//! once per step, so successive steps keep extending the same file.

use crate::domain::{ArchiveError, Result};
use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Timestamp pattern used in archive file names
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M";

/// Builds the archive file name for a run started at `at`
pub fn archive_file_name(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{prefix}_{}.zip", at.format(ARCHIVE_TIMESTAMP_FORMAT))
}

/// Append-only writer for the export archive
#[derive(Debug, Clone)]
pub struct ArchiveWriter {
    path: PathBuf,
}

impl ArchiveWriter {
    /// Creates a writer targeting `path`; nothing touches the filesystem
    /// until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the archive file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends entries to the archive, creating it on first use
    ///
    /// # Errors
    ///
    /// Returns an archive error if the file cannot be created or reopened,
    /// an entry cannot be written, or the central directory cannot be
    /// finalized.
    pub fn append_entries(&self, entries: &[(String, Vec<u8>)]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut zip = self.open_writer()?;
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, bytes) in entries {
            zip.start_file(name, options)
                .map_err(|e| ArchiveError::EntryFailed {
                    entry: name.clone(),
                    message: e.to_string(),
                })?;
            zip.write_all(bytes).map_err(|e| ArchiveError::EntryFailed {
                entry: name.clone(),
                message: e.to_string(),
            })?;
        }

        zip.finish().map_err(|e| ArchiveError::FinalizeFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Appended entries to archive"
        );

        Ok(())
    }

    /// Opens the zip writer in create or append mode
    fn open_writer(&self) -> Result<ZipWriter<File>> {
        if self.path.exists() {
            let file = OpenOptions::new()
                .read(true)
                .write(true)
                .open(&self.path)
                .map_err(|e| ArchiveError::AppendFailed {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                })?;
            let zip = ZipWriter::new_append(file).map_err(|e| ArchiveError::AppendFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
            Ok(zip)
        } else {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| ArchiveError::CreateFailed {
                        path: self.path.display().to_string(),
                        message: e.to_string(),
                    })?;
                }
            }
            let file = File::create(&self.path).map_err(|e| ArchiveError::CreateFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
            Ok(ZipWriter::new(file))
        }
    }
}
