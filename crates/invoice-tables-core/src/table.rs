//! Raw and normalized table types.
//!
//! [`RawTable`] is what an upstream extractor hands over: a header row and
//! data rows of optional text cells, possibly ragged. [`NormalizedTable`] is
//! the rectangular, uniquely-labeled result produced by
//! [`normalize`](crate::normalize).

/// A grid of optional text cells as detected by a table extractor.
///
/// The first row is the header row; the remaining rows are data rows. Rows
/// may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTable {
    /// 1-based page number the table was found on, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub page: Option<usize>,
    /// Header row followed by data rows.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create a raw table from its rows (header first).
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { page: None, rows }
    }

    /// Create a raw table from plain string cells, treating `""` as missing.
    ///
    /// Convenient for tests and for sources that have no notion of a null cell.
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let text: String = cell.into();
                        if text.is_empty() { None } else { Some(text) }
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Tag the table with the page it was found on.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// The header row, or an empty slice for a table with no rows.
    pub fn header(&self) -> &[Option<String>] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Data rows (everything after the header).
    pub fn data_rows(&self) -> &[Vec<Option<String>>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of cells in the header row.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }
}

/// A cleaned table: unique non-blank labels and rows aligned to them.
///
/// Only [`normalize`](crate::normalize) and [`combine`](crate::combine) build
/// these, so every instance upholds the invariants:
/// - labels are non-empty and pairwise distinct,
/// - every row has exactly `labels().len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalizedTable {
    page: Option<usize>,
    labels: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl NormalizedTable {
    pub(crate) fn from_parts(
        page: Option<usize>,
        labels: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == labels.len()));
        Self { page, labels, rows }
    }

    /// 1-based source page, `None` for combined tables or unknown origin.
    pub fn page(&self) -> Option<usize> {
        self.page
    }

    /// Column labels in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Data rows, each aligned 1:1 with [`labels`](Self::labels).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column with the given label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// All values of the column with the given label, top to bottom.
    pub fn column(&self, label: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(label)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Convert back into a [`RawTable`] with the labels as header row.
    ///
    /// Empty cells become `None`, so normalizing the result again yields an
    /// equal table (for tables with at least two columns).
    pub fn to_raw(&self) -> RawTable {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.push(self.labels.iter().cloned().map(Some).collect());
        for row in &self.rows {
            rows.push(
                row.iter()
                    .map(|cell| (!cell.is_empty()).then(|| cell.clone()))
                    .collect(),
            );
        }
        RawTable {
            page: self.page,
            rows,
        }
    }

    /// Consume the table, returning `(labels, rows)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.labels, self.rows)
    }
}
