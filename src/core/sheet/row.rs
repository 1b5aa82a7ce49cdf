//! Export row projection
//!
//! Flattens a content record into the fixed ten-column row written into its
//! workbook. Every cell is a string; the projection is 1:1 with no derived
//! fields beyond date formatting, the publish label and the canonical link.

use crate::domain::{BalerError, ContentRecord, NodeId, Result};

/// Header labels, in column order
pub const HEADERS: [&str; 10] = [
    "Node ID",
    "Link",
    "Content Type",
    "Title",
    "Author",
    "Created at",
    "Status",
    "Uuid",
    "Author Id",
    "Langcode",
];

/// Number of columns in an export row
pub const COLUMN_COUNT: usize = HEADERS.len();

/// Zero-based index of the hyperlinked Link column
pub const LINK_COLUMN: u16 = 1;

/// Cell format for the creation date column
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A single record projected into spreadsheet cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    cells: [String; COLUMN_COUNT],
}

impl ExportRow {
    /// Projects a content record into its row
    ///
    /// # Errors
    ///
    /// Returns an error if the canonical link cannot be built from the
    /// configured base URL.
    pub fn from_record(record: &ContentRecord, base_url: &str) -> Result<Self> {
        let link = canonical_url(base_url, record.id)?;

        let cells = [
            record.id.to_string(),
            link,
            record.bundle.as_str().to_string(),
            record.title.trim().to_string(),
            record.author_name.trim().to_string(),
            record.created.format(DATE_FORMAT).to_string(),
            record.status_label().to_string(),
            record.uuid.as_str().to_string(),
            record.author_id.to_string(),
            record.langcode.trim().to_string(),
        ];

        Ok(Self { cells })
    }

    /// Returns the cells in column order
    pub fn cells(&self) -> &[String; COLUMN_COUNT] {
        &self.cells
    }
}

/// Builds the absolute canonical URL of a node
///
/// # Errors
///
/// Returns an export error if the base URL does not parse.
pub fn canonical_url(base_url: &str, id: NodeId) -> Result<String> {
    // A base without a trailing slash would drop its last path segment on
    // join, so normalize first.
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    let base = url::Url::parse(&base)
        .map_err(|e| BalerError::Export(format!("Invalid base URL {base_url}: {e}")))?;
    let url = base
        .join(&format!("node/{id}"))
        .map_err(|e| BalerError::Export(format!("Failed to build node link: {e}")))?;

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bundle, ContentRecordBuilder, NodeUuid};
    use chrono::TimeZone;
    use chrono::Utc;
    use test_case::test_case;

    fn sample_record() -> ContentRecord {
        ContentRecordBuilder::new()
            .id(NodeId::new(17))
            .uuid(NodeUuid::new("b1f2-33cd").unwrap())
            .bundle(Bundle::new("article").unwrap())
            .title("  Release notes  ")
            .author_name("editor")
            .author_id(4)
            .created(Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap())
            .published(true)
            .langcode("en")
            .build()
            .unwrap()
    }

    #[test]
    fn test_row_projection() {
        let record = sample_record();
        let row = ExportRow::from_record(&record, "https://cms.example.com").unwrap();

        let expected = [
            "17",
            "https://cms.example.com/node/17",
            "article",
            "Release notes",
            "editor",
            "05-03-2024 09:30",
            "published",
            "b1f2-33cd",
            "4",
            "en",
        ];
        let cells: Vec<&str> = row.cells().iter().map(String::as_str).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_row_unpublished_label() {
        let mut record = sample_record();
        record.published = false;
        let row = ExportRow::from_record(&record, "https://cms.example.com").unwrap();
        assert_eq!(row.cells()[6], "unpublished");
    }

    #[test]
    fn test_headers_match_column_count() {
        assert_eq!(HEADERS.len(), COLUMN_COUNT);
        assert_eq!(HEADERS[LINK_COLUMN as usize], "Link");
    }

    #[test_case("https://cms.example.com", 5, "https://cms.example.com/node/5"; "bare host")]
    #[test_case("https://cms.example.com/", 5, "https://cms.example.com/node/5"; "trailing slash")]
    #[test_case("http://localhost:8080", 12, "http://localhost:8080/node/12"; "with port")]
    fn test_canonical_url(base: &str, id: u64, expected: &str) {
        assert_eq!(canonical_url(base, NodeId::new(id)).unwrap(), expected);
    }

    #[test]
    fn test_canonical_url_invalid_base() {
        assert!(canonical_url("not a url", NodeId::new(1)).is_err());
    }
}
