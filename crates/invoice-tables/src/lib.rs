//! invoice-tables: turn invoice PDFs into clean Excel workbooks.
//!
//! This is the public API facade. It re-exports the normalizer from
//! invoice-tables-core and wires it to its collaborators:
//!
//! - **source**: raw tables from a PDF (`pdfplumber` table detection) or JSON
//! - **convert**: source → normalized tables
//! - **workbook**: normalized tables → `.xlsx` (`umya-spreadsheet`)
//!
//! ```no_run
//! use invoice_tables::{Converter, PdfSource, WorkbookOptions, write_xlsx};
//!
//! let bytes = std::fs::read("invoice.pdf")?;
//! let source = PdfSource::open(&bytes, None)?;
//! let conversion = Converter::default().extract(&source)?;
//! if !conversion.is_empty() {
//!     write_xlsx(&conversion.tables, "Invoices_Extracted.xlsx".as_ref(), &WorkbookOptions::default())?;
//! }
//! # Ok::<(), invoice_tables::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod pages;
pub mod source;
pub mod workbook;

pub use invoice_tables_core;
pub use invoice_tables_core::{
    NormalizeOptions, Normalized, NormalizedTable, RawTable, SkippedTable, TableLayout, combine,
    normalize, normalize_with,
};
pub use pdfplumber::{Strategy, TableSettings};

pub use convert::{Conversion, Converter};
pub use error::{Error, Result};
pub use pages::{PageRangeError, parse_page_range};
pub use source::{
    InputKind, JsonSource, PdfSource, SourceOptions, TableSource, open_source, read_input,
};
pub use workbook::{DEFAULT_OUTPUT, WorkbookOptions, build_workbook, to_xlsx_bytes, write_xlsx};
