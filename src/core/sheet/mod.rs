//! Per-record workbook rendering
//!
//! Each exported record becomes a standalone XLSX workbook with one header
//! row and one data row. The workbook is rendered to an in-memory buffer and
//! handed straight to the archive; it never persists as a standalone file.

pub mod row;

pub use row::{ExportRow, COLUMN_COUNT, DATE_FORMAT, HEADERS, LINK_COLUMN};

use crate::domain::{ContentRecord, Result};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{DocProperties, Format, FormatAlign, Url as SheetUrl, Workbook};

/// Column width bounds, in character units
const MIN_COLUMN_WIDTH: usize = 15;
const MAX_COLUMN_WIDTH: usize = 85;

/// Workbook rendering options, fixed for the duration of a run
#[derive(Debug, Clone)]
pub struct SheetOptions {
    /// Worksheet name
    pub sheet_name: String,

    /// Creator stamped into the document properties
    pub creator: String,

    /// Run start time, used for the document title
    pub exported_at: DateTime<Utc>,
}

/// Renders single-record workbooks
#[derive(Debug, Clone)]
pub struct SheetRenderer {
    options: SheetOptions,
}

impl SheetRenderer {
    /// Creates a renderer with the given options
    pub fn new(options: SheetOptions) -> Self {
        Self { options }
    }

    /// Renders one record into XLSX bytes
    ///
    /// The layout mirrors what operators expect from a content export:
    /// a bold, autofiltered header row; a hyperlinked Link cell; wrapped,
    /// top-aligned text; column widths sized to content within fixed bounds.
    ///
    /// # Errors
    ///
    /// Returns a spreadsheet error if the workbook cannot be rendered, or an
    /// export error if the canonical link cannot be built.
    pub fn render(&self, record: &ContentRecord, base_url: &str) -> Result<Vec<u8>> {
        let export_row = ExportRow::from_record(record, base_url)?;

        let mut workbook = Workbook::new();
        let properties = DocProperties::new()
            .set_author(&self.options.creator)
            .set_title(&format!(
                "Content export - {}",
                self.options.exported_at.format(DATE_FORMAT)
            ));
        workbook.set_properties(&properties);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.options.sheet_name)?;

        let header_format = Format::new()
            .set_bold()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap();
        let body_format = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap();

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (col, cell) in export_row.cells().iter().enumerate() {
            let col = col as u16;
            if col == LINK_COLUMN {
                worksheet.write_url_with_format(
                    1,
                    col,
                    SheetUrl::new(cell.as_str()).set_text(cell.as_str()),
                    &body_format,
                )?;
            } else {
                worksheet.write_string_with_format(1, col, cell.as_str(), &body_format)?;
            }
        }

        worksheet.autofilter(0, 0, 0, (COLUMN_COUNT - 1) as u16)?;

        for (col, cell) in export_row.cells().iter().enumerate() {
            let width = column_width(HEADERS[col], cell);
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

/// Sizes a column to its longest content, clamped to the width bounds
fn column_width(header: &str, value: &str) -> usize {
    let content = header.chars().count().max(value.chars().count()) + 2;
    content.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// Archive entry name for a record's workbook
pub fn entry_name(record: &ContentRecord) -> String {
    format!("node_{}.xlsx", record.uuid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bundle, ContentRecordBuilder, NodeId, NodeUuid};
    use chrono::TimeZone;

    fn sample_record() -> ContentRecord {
        ContentRecordBuilder::new()
            .id(NodeId::new(17))
            .uuid(NodeUuid::new("b1f2-33cd").unwrap())
            .bundle(Bundle::new("article").unwrap())
            .title("Release notes")
            .author_name("editor")
            .author_id(4)
            .created(Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap())
            .published(true)
            .langcode("en")
            .build()
            .unwrap()
    }

    fn renderer() -> SheetRenderer {
        SheetRenderer::new(SheetOptions {
            sheet_name: "Export".to_string(),
            creator: "tester".to_string(),
            exported_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        })
    }

    #[test]
    fn test_render_produces_xlsx_bytes() {
        let bytes = renderer()
            .render(&sample_record(), "https://cms.example.com")
            .unwrap();

        // XLSX is a zip container; check the magic bytes
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_fails_on_bad_base_url() {
        let result = renderer().render(&sample_record(), "not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(&sample_record()), "node_b1f2-33cd.xlsx");
    }

    #[test]
    fn test_column_width_bounds() {
        assert_eq!(column_width("Id", "5"), MIN_COLUMN_WIDTH);
        assert_eq!(column_width("Title", &"x".repeat(200)), MAX_COLUMN_WIDTH);
        assert_eq!(column_width("Link", &"y".repeat(38)), 40);
    }
}
