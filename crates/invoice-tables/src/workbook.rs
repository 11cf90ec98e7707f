//! Excel export of normalized tables.
//!
//! Each table becomes one worksheet: labels in row 1, data from row 2, every
//! cell written as text. Encoding the `.xlsx` container is left to
//! `umya-spreadsheet`.

use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;

use invoice_tables_core::NormalizedTable;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use umya_spreadsheet::{Spreadsheet, writer};

use crate::error::{Error, Result};

/// File name used when the caller does not choose one.
pub const DEFAULT_OUTPUT: &str = "Invoices_Extracted.xlsx";

/// Longest worksheet name Excel accepts.
const MAX_SHEET_NAME: usize = 31;

/// Options for workbook generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookOptions {
    /// Worksheets are named `<prefix>_<n>`. Default: `"Table"`.
    pub sheet_prefix: String,
    /// Render the label row in bold. Default: `true`.
    pub bold_header: bool,
    /// Let Excel size columns to their content. Default: `true`.
    pub auto_width: bool,
}

impl Default for WorkbookOptions {
    fn default() -> Self {
        Self {
            sheet_prefix: "Table".to_string(),
            bold_header: true,
            auto_width: true,
        }
    }
}

/// Build an in-memory workbook with one worksheet per table.
///
/// Returns [`Error::NoTables`] for an empty slice; a workbook without sheets
/// is not a valid download.
pub fn build_workbook(tables: &[NormalizedTable], options: &WorkbookOptions) -> Result<Spreadsheet> {
    if tables.is_empty() {
        return Err(Error::NoTables);
    }

    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let names = sheet_names(&options.sheet_prefix, tables.len());

    for (table, name) in tables.iter().zip(&names) {
        let sheet = book
            .new_sheet(name.as_str())
            .map_err(|e| Error::Workbook(e.to_string()))?;

        for (col, label) in (1u32..).zip(table.labels()) {
            sheet.get_cell_mut((col, 1)).set_value_string(label.as_str());
            if options.bold_header {
                sheet.get_style_mut((col, 1)).get_font_mut().set_bold(true);
            }
            if options.auto_width {
                sheet.get_column_dimension_by_number_mut(&col).set_auto_width(true);
            }
        }

        for (row_num, row) in (2u32..).zip(table.rows()) {
            for (col, value) in (1u32..).zip(row) {
                if !value.is_empty() {
                    sheet.get_cell_mut((col, row_num)).set_value_string(value.as_str());
                }
            }
        }

        debug!(
            sheet = name.as_str(),
            rows = table.row_count(),
            columns = table.column_count(),
            "filled worksheet"
        );
    }

    Ok(book)
}

/// Serialize tables to `.xlsx` bytes.
pub fn to_xlsx_bytes(tables: &[NormalizedTable], options: &WorkbookOptions) -> Result<Vec<u8>> {
    let book = build_workbook(tables, options)?;
    let mut cursor = Cursor::new(Vec::new());
    writer::xlsx::write_writer(&book, &mut cursor).map_err(|e| Error::Workbook(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Write tables to an `.xlsx` file at `path`.
///
/// The workbook is written to a uniquely-named temporary file next to `path`
/// and renamed into place, so a failed export never leaves a partial file.
pub fn write_xlsx(tables: &[NormalizedTable], path: &Path, options: &WorkbookOptions) -> Result<()> {
    let book = build_workbook(tables, options)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    writer::xlsx::write_writer(&book, tmp.as_file_mut())
        .map_err(|e| Error::Workbook(e.to_string()))?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    info!(path = %path.display(), sheets = tables.len(), "wrote workbook");
    Ok(())
}

/// Worksheet names `<prefix>_1..=<prefix>_count`, made valid and unique.
pub fn sheet_names(prefix: &str, count: usize) -> Vec<String> {
    let mut used = HashSet::with_capacity(count);
    (1..=count)
        .map(|n| {
            let base = sanitize_sheet_name(&format!("{prefix}_{n}"));
            let mut name = base.clone();
            let mut k = 2;
            while !used.insert(name.to_lowercase()) {
                let suffix = format!(" ({k})");
                let keep = MAX_SHEET_NAME.saturating_sub(suffix.chars().count());
                name = format!("{}{suffix}", base.chars().take(keep).collect::<String>());
                k += 1;
            }
            name
        })
        .collect()
}

/// Replace characters Excel forbids in sheet names and cap the length.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim_matches('\'');
    let capped: String = cleaned.chars().take(MAX_SHEET_NAME).collect();
    if capped.trim().is_empty() {
        "Sheet".to_string()
    } else {
        capped
    }
}
