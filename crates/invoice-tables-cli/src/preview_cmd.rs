use invoice_tables::NormalizedTable;

use crate::cli::{ExtractArgs, OutputFormat};
use crate::shared::{csv_escape, load_tables, no_tables_message};

pub fn run(args: &ExtractArgs, format: &OutputFormat) -> Result<(), i32> {
    let (conversion, kind) = load_tables(args)?;

    // JSON stays machine-readable: an empty result is `[]`, not a message.
    if conversion.is_empty() && !matches!(format, OutputFormat::Json) {
        println!("{}", no_tables_message(kind));
        return Ok(());
    }

    let out = match format {
        OutputFormat::Text => render_grid(&conversion.tables),
        OutputFormat::Json => render_json(&conversion.tables).map_err(|e| {
            eprintln!("Error: failed to serialize tables: {e}");
            1
        })?,
        OutputFormat::Csv => render_csv(&conversion.tables),
    };
    print!("{out}");
    Ok(())
}

/// Aligned `|`-separated grids, labels first, one block per table.
pub fn render_grid(tables: &[NormalizedTable]) -> String {
    let mut out = String::new();

    for (num, table) in tables.iter().enumerate() {
        let origin = match table.page() {
            Some(page) => format!("page {page}"),
            None => "combined".to_string(),
        };
        out.push_str(&format!(
            "--- Table {} ({}, {} rows x {} columns) ---\n",
            num + 1,
            origin,
            table.row_count(),
            table.column_count(),
        ));

        let mut widths: Vec<usize> = table.labels().iter().map(|l| l.chars().count()).collect();
        for row in table.rows() {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let format_row = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(text, &width)| format!("{text:<width$}"))
                .collect();
            format!("| {} |\n", padded.join(" | "))
        };

        out.push_str(&format_row(table.labels()));
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        out.push_str(&format!("|-{}-|\n", rule.join("-|-")));
        for row in table.rows() {
            out.push_str(&format_row(row.as_slice()));
        }
        out.push('\n');
    }

    out
}

/// A JSON array of `{page, labels, rows}` objects.
pub fn render_json(tables: &[NormalizedTable]) -> serde_json::Result<String> {
    let json_str = serde_json::to_string(tables)?;
    Ok(format!("{json_str}\n"))
}

/// Each table as CSV (labels, then rows), tables separated by a blank line.
pub fn render_csv(tables: &[NormalizedTable]) -> String {
    let mut out = String::new();

    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line = |cells: &[String]| {
            let escaped: Vec<String> = cells.iter().map(|c| csv_escape(c)).collect();
            format!("{}\n", escaped.join(","))
        };
        out.push_str(&line(table.labels()));
        for row in table.rows() {
            out.push_str(&line(row.as_slice()));
        }
    }

    out
}
