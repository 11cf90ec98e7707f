//! Concatenation of normalized tables into a single table.

use std::collections::HashMap;

use crate::table::NormalizedTable;

/// Concatenate tables top to bottom, aligning columns by label.
///
/// The result's labels are the union of all input labels in order of first
/// appearance. A row from a table that lacks one of those labels gets `""`
/// in that column. Returns `None` when `tables` is empty.
pub fn combine(tables: &[NormalizedTable]) -> Option<NormalizedTable> {
    if tables.is_empty() {
        return None;
    }

    let mut labels: Vec<String> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for table in tables {
        for label in table.labels() {
            if !positions.contains_key(label.as_str()) {
                positions.insert(label.as_str(), labels.len());
                labels.push(label.clone());
            }
        }
    }

    let total_rows = tables.iter().map(NormalizedTable::row_count).sum();
    let mut rows = Vec::with_capacity(total_rows);
    for table in tables {
        let targets: Vec<usize> = table
            .labels()
            .iter()
            .map(|label| positions[label.as_str()])
            .collect();
        for row in table.rows() {
            let mut out = vec![String::new(); labels.len()];
            for (cell, &target) in row.iter().zip(&targets) {
                out[target] = cell.clone();
            }
            rows.push(out);
        }
    }

    Some(NormalizedTable::from_parts(None, labels, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(labels: &[&str], rows: &[&[&str]]) -> NormalizedTable {
        NormalizedTable::from_parts(
            Some(1),
            labels.iter().map(|l| l.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn combine_empty_is_none() {
        assert!(combine(&[]).is_none());
    }

    #[test]
    fn combine_single_table_drops_page() {
        let t = table(&["A", "B"], &[&["1", "2"]]);
        let combined = combine(std::slice::from_ref(&t)).unwrap();
        assert_eq!(combined.labels(), t.labels());
        assert_eq!(combined.rows(), t.rows());
        assert_eq!(combined.page(), None);
    }

    #[test]
    fn combine_same_labels_stacks_rows() {
        let a = table(&["Item", "Qty"], &[&["Pen", "5"]]);
        let b = table(&["Item", "Qty"], &[&["Book", "1"], &["Ink", "2"]]);
        let combined = combine(&[a, b]).unwrap();
        assert_eq!(combined.labels(), ["Item", "Qty"]);
        assert_eq!(combined.column("Item").unwrap(), vec!["Pen", "Book", "Ink"]);
    }

    #[test]
    fn combine_unions_labels_in_first_appearance_order() {
        let a = table(&["Item", "Qty"], &[&["Pen", "5"]]);
        let b = table(&["Price", "Item"], &[&["2.00", "Book"]]);
        let combined = combine(&[a, b]).unwrap();
        assert_eq!(combined.labels(), ["Item", "Qty", "Price"]);
        assert_eq!(
            combined.rows(),
            [
                vec!["Pen".to_string(), "5".to_string(), String::new()],
                vec!["Book".to_string(), String::new(), "2.00".to_string()],
            ]
        );
    }
}
