use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use invoice_tables::DEFAULT_OUTPUT;

/// Extract tables from PDF invoices, preview them, and export them to Excel.
#[derive(Debug, Parser)]
#[command(name = "invoice-tables", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract tables and print a preview
    Preview {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract tables and write them to an Excel workbook
    Convert {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Path of the workbook to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Worksheets are named <PREFIX>_1, <PREFIX>_2, ...
        #[arg(long, default_value = "Table")]
        sheet_prefix: String,

        /// Do not style the header row
        #[arg(long)]
        plain: bool,
    },
}

/// Options shared by every subcommand that reads a document.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to the PDF or table JSON file ('-' reads standard input)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input: InputFormat,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    pub strategy: TableStrategy,

    /// Snap tolerance for aligning nearby edges (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub snap_tolerance: f64,

    /// Join tolerance for merging collinear edges (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub join_tolerance: f64,

    /// Text tolerance for assigning text to cells (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub text_tolerance: f64,

    /// Keep tables separate or concatenate them into one
    #[arg(long, value_enum, default_value_t = Layout::Separate)]
    pub layout: Layout,

    /// Keep columns that are empty in every row
    #[arg(long)]
    pub keep_empty_columns: bool,

    /// Discard tables with fewer header cells than this
    #[arg(long, default_value_t = 2)]
    pub min_columns: usize,
}

/// Preview format for extracted tables.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Input document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Detect from content and file extension
    Auto,
    Pdf,
    Json,
}

/// Table detection strategy.
#[derive(Debug, Clone, ValueEnum)]
pub enum TableStrategy {
    /// Ruling lines and rect edges
    Lattice,
    /// Text alignment, for tables without borders
    Stream,
}

/// How extracted tables are emitted.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Layout {
    /// One table (and worksheet) per detected table
    Separate,
    /// All tables concatenated into one
    Combined,
}
