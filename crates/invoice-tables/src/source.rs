//! Where raw tables come from.
//!
//! [`PdfSource`] runs `pdfplumber` table detection over the pages of a PDF
//! held in memory. [`JsonSource`] accepts tables another extractor (an OCR
//! pipeline, `pdfplumber tables --format json`) already produced.

use std::io::Read;
use std::path::Path;

use invoice_tables_core::RawTable;
use pdfplumber::{Pdf, TableSettings};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::pages::parse_page_range;

/// Anything that can hand over raw tables for normalization.
pub trait TableSource {
    /// Produce raw tables in document order.
    ///
    /// Upstream failures are errors; a document without tables is `Ok(vec![])`.
    fn raw_tables(&self) -> Result<Vec<RawTable>>;
}

/// Input document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pdf,
    Json,
}

impl InputKind {
    /// Guess the format from the content, falling back to the file extension.
    ///
    /// A leading `[` or `{` means JSON, even if a cell mentions `%PDF-`.
    /// Otherwise the PDF header may follow up to 1024 bytes of leading junk.
    pub fn detect(path: &Path, bytes: &[u8]) -> Option<Self> {
        if let Some(&first) = bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            if first == b'[' || first == b'{' {
                return Some(InputKind::Json);
            }
        }
        let head = bytes.get(..1024).unwrap_or(bytes);
        if head.windows(5).any(|w| w == b"%PDF-") {
            return Some(InputKind::Pdf);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Some(InputKind::Pdf),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(InputKind::Json),
            _ => None,
        }
    }
}

/// Read a whole input into memory. `-` reads standard input.
///
/// Documents are processed from this buffer; nothing is written to a shared
/// scratch path.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}

/// Options for opening a table source.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Password for encrypted PDFs.
    pub password: Option<String>,
    /// Page selection such as `"1,3-5"`. `None` means all pages.
    pub pages: Option<String>,
    /// Table detection settings passed to `pdfplumber`.
    pub settings: TableSettings,
}

/// Open the right source for `bytes`.
pub fn open_source(
    bytes: &[u8],
    kind: InputKind,
    options: &SourceOptions,
) -> Result<Box<dyn TableSource>> {
    match kind {
        InputKind::Pdf => {
            let mut source = PdfSource::open(bytes, options.password.as_deref())?
                .with_settings(options.settings.clone());
            if let Some(pages) = options.pages.as_deref() {
                source = source.with_pages(pages)?;
            }
            Ok(Box::new(source))
        }
        InputKind::Json => Ok(Box::new(JsonSource::parse(bytes)?)),
    }
}

/// Tables detected in a PDF by `pdfplumber`.
pub struct PdfSource {
    pdf: Pdf,
    pages: Option<Vec<usize>>,
    settings: TableSettings,
}

impl PdfSource {
    /// Open a PDF from bytes, decrypting with `password` when given.
    pub fn open(bytes: &[u8], password: Option<&str>) -> Result<Self> {
        let pdf = match password {
            Some(pw) => Pdf::open_with_password(bytes, pw.as_bytes(), None)?,
            None => Pdf::open(bytes, None)?,
        };
        debug!(pages = pdf.page_count(), "opened PDF");
        Ok(Self {
            pdf,
            pages: None,
            settings: TableSettings::default(),
        })
    }

    pub fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    /// Restrict extraction to a 1-based page selection such as `"1,3-5"`.
    pub fn with_pages(mut self, selection: &str) -> Result<Self> {
        self.pages = Some(parse_page_range(selection, self.page_count())?);
        Ok(self)
    }

    pub fn with_settings(mut self, settings: TableSettings) -> Self {
        self.settings = settings;
        self
    }

    fn page_indices(&self) -> Vec<usize> {
        match &self.pages {
            Some(pages) => pages.clone(),
            None => (0..self.page_count()).collect(),
        }
    }
}

impl TableSource for PdfSource {
    fn raw_tables(&self) -> Result<Vec<RawTable>> {
        let mut out = Vec::new();

        for idx in self.page_indices() {
            let page = self.pdf.page(idx).map_err(|source| Error::Page {
                page: idx + 1,
                source,
            })?;
            let tables = page.find_tables(&self.settings);
            debug!(page = idx + 1, tables = tables.len(), "detected tables");

            for table in tables {
                let rows: Vec<Vec<Option<String>>> = table
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.text).collect())
                    .collect();
                trace!(page = idx + 1, rows = rows.len(), "raw table");
                out.push(RawTable::new(rows).with_page(idx + 1));
            }
        }

        Ok(out)
    }
}

/// One table in the JSON input: bare rows, or an object with `rows` and an
/// optional `page`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Rows(Vec<Vec<Option<String>>>),
    Tagged(RawTable),
}

/// Raw tables supplied as JSON.
#[derive(Debug, Clone)]
pub struct JsonSource {
    tables: Vec<RawTable>,
}

impl JsonSource {
    /// Parse a JSON array of tables.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let parsed: Vec<JsonTable> = serde_json::from_slice(bytes)?;
        let tables = parsed
            .into_iter()
            .map(|t| match t {
                JsonTable::Rows(rows) => RawTable::new(rows),
                JsonTable::Tagged(raw) => raw,
            })
            .collect::<Vec<_>>();
        debug!(tables = tables.len(), "parsed table JSON");
        Ok(Self { tables })
    }

    pub fn from_tables(tables: Vec<RawTable>) -> Self {
        Self { tables }
    }
}

impl TableSource for JsonSource {
    fn raw_tables(&self) -> Result<Vec<RawTable>> {
        Ok(self.tables.clone())
    }
}
