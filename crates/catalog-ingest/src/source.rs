//! Source sheet loading with format dispatch.

use std::fmt;
use std::path::{Path, PathBuf};

use catalog_common::non_blank_count;
use polars::prelude::*;

use crate::csv::{CsvDialect, read_csv_source};
use crate::error::{IngestError, Result};
use crate::workbook::read_workbook_source;

/// How the source was decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    Csv(CsvDialect),
    Workbook { sheet: String },
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv(dialect) => write!(
                f,
                "CSV ({}, '{}')",
                dialect.encoding,
                char::from(dialect.separator)
            ),
            SourceFormat::Workbook { sheet } => write!(f, "workbook (sheet '{sheet}')"),
        }
    }
}

/// A loaded supplier sheet.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub path: PathBuf,
    pub format: SourceFormat,
    /// Every header as read, in source order, including dropped columns.
    pub headers: Vec<String>,
    /// Text-only data, one column per non-empty source column.
    pub data: DataFrame,
    /// Columns removed because every cell was blank.
    pub dropped_columns: Vec<String>,
}

impl SourceTable {
    /// Names of the columns left in `data`.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }
}

/// Loads a supplier sheet, choosing the reader from the file extension.
///
/// Columns that are blank in every row are dropped right after loading.
pub fn load_source(path: &Path) -> Result<SourceTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let (data, format) = match extension.as_str() {
        "csv" | "txt" => {
            let (df, dialect) = read_csv_source(path)?;
            (df, SourceFormat::Csv(dialect))
        }
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => {
            let (df, sheet) = read_workbook_source(path)?;
            (df, SourceFormat::Workbook { sheet })
        }
        _ => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }
    };

    let headers: Vec<String> = data
        .get_column_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    let (data, dropped_columns) = drop_blank_columns(data)?;
    if !dropped_columns.is_empty() {
        tracing::debug!(
            path = %path.display(),
            dropped = ?dropped_columns,
            "dropped all-blank columns"
        );
    }
    tracing::info!(
        path = %path.display(),
        format = %format,
        rows = data.height(),
        columns = data.width(),
        "source loaded"
    );

    Ok(SourceTable {
        path: path.to_path_buf(),
        format,
        headers,
        data,
        dropped_columns,
    })
}

/// Removes columns with no non-blank cell. Tables without rows are kept as-is.
fn drop_blank_columns(df: DataFrame) -> Result<(DataFrame, Vec<String>)> {
    if df.height() == 0 {
        return Ok((df, Vec::new()));
    }
    let mut kept = Vec::with_capacity(df.width());
    let mut dropped = Vec::new();
    for column in df.get_columns() {
        if non_blank_count(column) == 0 {
            dropped.push(column.name().to_string());
        } else {
            kept.push(column.clone());
        }
    }
    if dropped.is_empty() {
        return Ok((df, dropped));
    }
    Ok((DataFrame::new(kept)?, dropped))
}
