//! Source → normalize pipeline.

use invoice_tables_core::{NormalizeOptions, NormalizedTable, SkippedTable, normalize_report};
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::source::TableSource;

/// Result of running a source through the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Tables ready for preview or export.
    pub tables: Vec<NormalizedTable>,
    /// Raw tables dropped by the column-count filter.
    pub skipped: Vec<SkippedTable>,
    /// How many raw tables the source produced.
    pub raw_count: usize,
}

impl Conversion {
    /// `true` when nothing survived ("no tables found").
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Runs table sources through the normalizer with fixed options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: NormalizeOptions,
}

impl Converter {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Pull raw tables from `source` and normalize them.
    ///
    /// Errors only come from the source. An empty [`Conversion`] is a valid
    /// outcome.
    pub fn extract(&self, source: &dyn TableSource) -> Result<Conversion> {
        let _span = info_span!("extract").entered();

        let raw = source.raw_tables()?;
        let report = normalize_report(&raw, &self.options);

        for skip in &report.skipped {
            debug!(
                index = skip.index,
                page = ?skip.page,
                columns = skip.columns,
                "skipped table with too few columns"
            );
        }
        info!(
            raw = raw.len(),
            tables = report.tables.len(),
            skipped = report.skipped.len(),
            "normalized tables"
        );

        Ok(Conversion {
            tables: report.tables,
            skipped: report.skipped,
            raw_count: raw.len(),
        })
    }
}
