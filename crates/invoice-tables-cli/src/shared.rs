use invoice_tables::{
    Conversion, Converter, Error, InputKind, NormalizeOptions, SourceOptions, Strategy,
    TableLayout, TableSettings, open_source, read_input,
};
use tracing::debug;

use crate::cli::{ExtractArgs, InputFormat, Layout, TableStrategy};

/// Message printed when no table survives normalization.
pub fn no_tables_message(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Pdf => "No tables found in the PDF.",
        InputKind::Json => "No tables found in the input.",
    }
}

/// Read the input, extract and normalize its tables.
///
/// Returns `Err(1)` with a message printed to stderr for any upstream failure.
pub fn load_tables(args: &ExtractArgs) -> Result<(Conversion, InputKind), i32> {
    let bytes = read_input(&args.file).map_err(report)?;

    let kind = match args.input {
        InputFormat::Pdf => InputKind::Pdf,
        InputFormat::Json => InputKind::Json,
        InputFormat::Auto => {
            InputKind::detect(&args.file, &bytes).ok_or_else(|| report(Error::UnknownFormat))?
        }
    };
    debug!(?kind, bytes = bytes.len(), "read input");

    let source = open_source(&bytes, kind, &source_options(args)).map_err(report)?;
    let conversion = Converter::new(normalize_options(args))
        .extract(source.as_ref())
        .map_err(report)?;

    Ok((conversion, kind))
}

/// Print an error the way every command does and return the exit code.
pub fn report(err: Error) -> i32 {
    tracing::error!(error = %err, "command failed");
    eprintln!("Error: {err}");
    1
}

pub fn source_options(args: &ExtractArgs) -> SourceOptions {
    SourceOptions {
        password: args.password.clone(),
        pages: args.pages.clone(),
        settings: build_settings(args),
    }
}

pub fn build_settings(args: &ExtractArgs) -> TableSettings {
    let strategy = match args.strategy {
        TableStrategy::Lattice => Strategy::Lattice,
        TableStrategy::Stream => Strategy::Stream,
    };

    TableSettings {
        strategy,
        snap_tolerance: args.snap_tolerance,
        snap_x_tolerance: args.snap_tolerance,
        snap_y_tolerance: args.snap_tolerance,
        join_tolerance: args.join_tolerance,
        join_x_tolerance: args.join_tolerance,
        join_y_tolerance: args.join_tolerance,
        text_tolerance: args.text_tolerance,
        text_x_tolerance: args.text_tolerance,
        text_y_tolerance: args.text_tolerance,
        ..TableSettings::default()
    }
}

pub fn normalize_options(args: &ExtractArgs) -> NormalizeOptions {
    NormalizeOptions {
        min_columns: args.min_columns,
        prune_empty_columns: !args.keep_empty_columns,
        layout: match args.layout {
            Layout::Separate => TableLayout::Separate,
            Layout::Combined => TableLayout::Combined,
        },
    }
}

/// Escape a string for CSV output.
///
/// Text containing commas, double quotes, or newlines is wrapped in double
/// quotes with internal quotes doubled.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
