//! Column label synthesis and deduplication.

use std::collections::{HashMap, HashSet};

/// Prefix of the placeholder label given to blank header cells.
pub const PLACEHOLDER_PREFIX: &str = "Column_";

/// Returns whether a cell is missing or contains only whitespace.
pub fn is_blank(cell: Option<&str>) -> bool {
    cell.is_none_or(|text| text.trim().is_empty())
}

/// Turn a header row into labels, one per cell.
///
/// Blank cells get a positional placeholder (`Column_<index>`, 0-based);
/// everything else is trimmed.
pub fn synthesize_labels(header: &[Option<String>]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell.as_deref() {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => format!("{PLACEHOLDER_PREFIX}{idx}"),
        })
        .collect()
}

/// Make labels unique while keeping every first occurrence unchanged.
///
/// A repeated label is renamed to `<label>_<n>` where `n` counts the prior
/// collisions of that label (`_1`, `_2`, ...). A candidate that is already
/// taken, either by an earlier output label or by a label appearing anywhere
/// in the input, is skipped and the counter advances.
pub fn dedupe_labels(labels: Vec<String>) -> Vec<String> {
    let reserved: HashSet<String> = labels.iter().cloned().collect();
    let mut emitted: HashSet<String> = HashSet::with_capacity(labels.len());
    let mut collisions: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(labels.len());

    for label in labels {
        if emitted.insert(label.clone()) {
            out.push(label);
            continue;
        }

        let counter = collisions.entry(label.clone()).or_insert(0);
        let renamed = loop {
            *counter += 1;
            let candidate = format!("{label}_{counter}");
            if !reserved.contains(&candidate) && !emitted.contains(&candidate) {
                break candidate;
            }
        };
        emitted.insert(renamed.clone());
        out.push(renamed);
    }

    out
}
