//! Spreadsheet workbook reading (xlsx, xls, xlsm, ods).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use catalog_common::{format_numeric, text_column_opt};
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::headers::{UNNAMED_PREFIX, unique_headers};

/// Reads the first worksheet of a workbook into a text-only DataFrame.
///
/// The first row is the header. Numeric cells are rendered as text, with
/// integer-valued numbers written without a fractional part so barcodes
/// stored as numbers keep every digit.
pub fn read_workbook_source(path: &Path) -> Result<(DataFrame, String)> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet '{sheet_name}': {e}"),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };

    let headers = unique_headers(header_row.iter().map(cell_text));
    if headers.iter().all(|name| name.starts_with(UNNAMED_PREFIX)) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, values) in columns.iter_mut().enumerate() {
            values.push(row.get(idx).and_then(cell_text));
        }
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = columns.first().map_or(0, Vec::len),
        columns = headers.len(),
        "read workbook source"
    );

    let columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| text_column_opt(name, values))
        .collect();
    let df = DataFrame::new(columns)?;
    Ok((df, sheet_name))
}

/// Renders a workbook cell as text; empty cells become `None`.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_numeric(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
