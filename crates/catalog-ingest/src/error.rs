//! Error types for supplier sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a supplier sheet.
///
/// Every variant is a structural failure: the run stops before any
/// normalization happens.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not a supported CSV or workbook format.
    #[error("unsupported source format '{extension}' for {path} (expected .csv, .xlsx, .xls, .xlsm or .ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === CSV Errors ===
    /// File has no bytes or only whitespace.
    #[error("source file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// First line holds no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Workbook Errors ===
    /// Workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
