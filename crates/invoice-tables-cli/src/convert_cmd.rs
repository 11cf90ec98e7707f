use std::path::Path;

use invoice_tables::{WorkbookOptions, write_xlsx};

use crate::cli::ExtractArgs;
use crate::shared::{load_tables, no_tables_message, report};

pub fn run(args: &ExtractArgs, output: &Path, sheet_prefix: &str, plain: bool) -> Result<(), i32> {
    let (conversion, kind) = load_tables(args)?;

    if conversion.is_empty() {
        println!("{}", no_tables_message(kind));
        return Ok(());
    }

    let options = WorkbookOptions {
        sheet_prefix: sheet_prefix.to_string(),
        bold_header: !plain,
        ..WorkbookOptions::default()
    };
    write_xlsx(&conversion.tables, output, &options).map_err(report)?;

    let rows: usize = conversion.tables.iter().map(|t| t.row_count()).sum();
    println!(
        "Wrote {} table(s), {} row(s) to {}",
        conversion.tables.len(),
        rows,
        output.display()
    );
    if !conversion.skipped.is_empty() {
        println!(
            "Skipped {} table(s) with fewer than {} columns",
            conversion.skipped.len(),
            args.min_columns
        );
    }

    Ok(())
}
