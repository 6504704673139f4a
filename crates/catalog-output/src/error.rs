//! Output error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unsupported output extension '{extension}' for {path}; use .xlsx or .csv")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write workbook {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[error("table has {rows} rows; the workbook format holds at most {max}")]
    TooManyRows { rows: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, OutputError>;
