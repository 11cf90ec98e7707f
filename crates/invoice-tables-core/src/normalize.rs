//! Raw table normalization.
//!
//! Turns ragged [`RawTable`]s into rectangular [`NormalizedTable`]s:
//! filter narrow tables, synthesize and dedupe labels, align rows, and
//! optionally prune columns that are empty in every row.

use crate::combine::combine;
use crate::header::{dedupe_labels, is_blank, synthesize_labels};
use crate::table::{NormalizedTable, RawTable};

/// How normalized tables are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TableLayout {
    /// One output table per surviving input table.
    #[default]
    Separate,
    /// All surviving tables concatenated into a single table.
    Combined,
}

/// Options for [`normalize_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeOptions {
    /// Tables whose header has fewer cells than this are discarded. Default: `2`.
    pub min_columns: usize,
    /// Drop columns that are empty in every data row. Default: `true`.
    pub prune_empty_columns: bool,
    /// Output layout. Default: [`TableLayout::Separate`].
    pub layout: TableLayout,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            min_columns: 2,
            prune_empty_columns: true,
            layout: TableLayout::Separate,
        }
    }
}

/// A raw table that was dropped by the column-count filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedTable {
    /// Position of the table in the input slice.
    pub index: usize,
    /// Source page of the table, if known.
    pub page: Option<usize>,
    /// Number of header cells the table had.
    pub columns: usize,
}

/// Normalized tables together with the inputs that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Normalized {
    pub tables: Vec<NormalizedTable>,
    pub skipped: Vec<SkippedTable>,
}

impl Normalized {
    /// Returns `true` when no table survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Normalize raw tables with the default options.
///
/// Output order follows input order; discarded tables are omitted. An empty
/// result means no usable table was found and is not an error.
pub fn normalize(raw_tables: &[RawTable]) -> Vec<NormalizedTable> {
    normalize_with(raw_tables, &NormalizeOptions::default())
}

/// Normalize raw tables with explicit options.
pub fn normalize_with(raw_tables: &[RawTable], options: &NormalizeOptions) -> Vec<NormalizedTable> {
    normalize_report(raw_tables, options).tables
}

/// Normalize raw tables and report which inputs were skipped.
pub fn normalize_report(raw_tables: &[RawTable], options: &NormalizeOptions) -> Normalized {
    let mut tables = Vec::with_capacity(raw_tables.len());
    let mut skipped = Vec::new();

    for (index, raw) in raw_tables.iter().enumerate() {
        match normalize_table(raw, options) {
            Some(table) => tables.push(table),
            None => skipped.push(SkippedTable {
                index,
                page: raw.page,
                columns: raw.column_count(),
            }),
        }
    }

    if options.layout == TableLayout::Combined {
        tables = combine(&tables)
            .map(|table| {
                if options.prune_empty_columns {
                    prune_table(table)
                } else {
                    table
                }
            })
            .into_iter()
            .collect();
    }

    Normalized { tables, skipped }
}

/// Normalize a single raw table, or `None` if it is too narrow.
///
/// The `layout` option is ignored here; it only affects [`normalize_with`].
pub fn normalize_table(raw: &RawTable, options: &NormalizeOptions) -> Option<NormalizedTable> {
    let width = raw.column_count();
    if width < options.min_columns.max(1) {
        return None;
    }

    let labels = dedupe_labels(synthesize_labels(raw.header()));
    let rows: Vec<Vec<String>> = raw
        .data_rows()
        .iter()
        .map(|row| align_row(row, width))
        .collect();

    let (labels, rows) = if options.prune_empty_columns && !rows.is_empty() {
        prune_empty_columns(labels, rows)
    } else {
        (labels, rows)
    };

    Some(NormalizedTable::from_parts(raw.page, labels, rows))
}

/// Pad or truncate a row to `width` cells, mapping blank cells to `""`.
fn align_row(row: &[Option<String>], width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| match row.get(idx).and_then(|c| c.as_deref()) {
            Some(text) if !is_blank(Some(text)) => text.to_string(),
            _ => String::new(),
        })
        .collect()
}

/// Prune a finished table. Header-only tables are left alone.
///
/// Combined tables need this: a header-only input contributes labels that no
/// row fills.
fn prune_table(table: NormalizedTable) -> NormalizedTable {
    if table.rows().is_empty() {
        return table;
    }
    let page = table.page();
    let (labels, rows) = table.into_parts();
    let (labels, rows) = prune_empty_columns(labels, rows);
    NormalizedTable::from_parts(page, labels, rows)
}

/// Remove every column that is `""` in all rows.
pub(crate) fn prune_empty_columns(
    labels: Vec<String>,
    rows: Vec<Vec<String>>,
) -> (Vec<String>, Vec<Vec<String>>) {
    let keep: Vec<bool> = (0..labels.len())
        .map(|col| rows.iter().any(|row| !row[col].is_empty()))
        .collect();

    if keep.iter().all(|&k| k) {
        return (labels, rows);
    }

    let labels = labels
        .into_iter()
        .zip(&keep)
        .filter_map(|(label, &k)| k.then_some(label))
        .collect();
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&keep)
                .filter_map(|(cell, &k)| k.then_some(cell))
                .collect()
        })
        .collect();

    (labels, rows)
}
