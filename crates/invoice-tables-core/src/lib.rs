//! invoice-tables-core: backend-independent table normalization.
//!
//! Takes raw tables as an extractor detected them (ragged rows of optional
//! text cells, header first) and produces rectangular tables with unique,
//! non-blank column labels, ready for previewing or spreadsheet export.
//! Pure Rust, no I/O.

pub mod combine;
pub mod header;
pub mod normalize;
pub mod table;

pub use combine::combine;
pub use header::{PLACEHOLDER_PREFIX, dedupe_labels, is_blank, synthesize_labels};
pub use normalize::{
    Normalized, NormalizeOptions, SkippedTable, TableLayout, normalize, normalize_report,
    normalize_table, normalize_with,
};
pub use table::{NormalizedTable, RawTable};
