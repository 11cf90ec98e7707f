//! Error type for table extraction and export.
//!
//! Normalization itself cannot fail; everything here comes from the
//! collaborators around it (reading input, parsing the PDF, writing the
//! workbook) and must reach the user as a distinct condition rather than an
//! empty table list.

use std::path::PathBuf;

use pdfplumber::PdfError;
use thiserror::Error;

use crate::pages::PageRangeError;

/// Fatal errors while extracting or exporting tables.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The PDF could not be opened.
    #[error("failed to open PDF: {0}")]
    Pdf(PdfError),

    /// The PDF is encrypted and no password was supplied.
    #[error("PDF is encrypted; supply a password")]
    PasswordRequired,

    /// The supplied password does not open the PDF.
    #[error("the supplied password is incorrect")]
    InvalidPassword,

    /// A single page could not be read.
    #[error("failed to read page {page}: {source}")]
    Page {
        /// 1-based page number.
        page: usize,
        source: PdfError,
    },

    /// The page selection was invalid for this document.
    #[error(transparent)]
    Pages(#[from] PageRangeError),

    /// Raw table JSON did not have the expected shape.
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was neither a PDF nor table JSON.
    #[error("unrecognized input format (expected PDF or table JSON)")]
    UnknownFormat,

    /// A workbook was requested for an empty table list.
    #[error("no tables to export")]
    NoTables,

    /// The spreadsheet library rejected the workbook.
    #[error("failed to build workbook: {0}")]
    Workbook(String),
}

impl From<PdfError> for Error {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::PasswordRequired => Error::PasswordRequired,
            PdfError::InvalidPassword => Error::InvalidPassword,
            other => Error::Pdf(other),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
