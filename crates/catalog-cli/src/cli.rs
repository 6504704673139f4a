//! CLI argument definitions for the catalog normalizer.

use std::path::PathBuf;

use catalog_cli::logging::LogFormat;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "catalog-normalizer",
    version,
    about = "Normalize supplier product sheets into the canonical import layout",
    long_about = "Normalize supplier product spreadsheets into the 22-column import sheet.\n\n\
                  Cleans SKU, NCM and barcodes, resolves unit and origin codes, and \
                  formats prices and measures with a comma decimal separator."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow supplier cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a supplier sheet and write the import sheet.
    Normalize(NormalizeArgs),

    /// List the canonical fields and the rule applied to each.
    Fields,

    /// Show the columns of a supplier sheet with fill counts and samples.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Supplier sheet (.csv, .txt, .xlsx, .xls, .xlsm, .xlsb, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// TOML mapping file with a [columns] table.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Map a canonical field to a source column (FIELD=COLUMN); repeatable.
    ///
    /// Overrides entries from the mapping file.
    #[arg(long = "map", value_name = "FIELD=COLUMN")]
    pub map: Vec<String>,

    /// Output path (.xlsx or .csv; default: <INPUT>_importacao.xlsx).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of normalized rows to print (0 disables the preview).
    #[arg(long = "preview", value_name = "N", default_value_t = 50)]
    pub preview: usize,

    /// Normalize and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Supplier sheet to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
