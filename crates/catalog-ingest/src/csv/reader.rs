//! CSV file reading into text-only DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::headers::unique_headers;

use super::dialect::{CsvDialect, decode};

/// Reads a supplier CSV into a DataFrame where every column is a string.
///
/// Schema inference is disabled so identifiers keep their leading zeros and
/// long barcodes are never turned into floats. Empty cells load as nulls.
/// Header names are trimmed the same way the workbook reader trims them.
pub fn read_csv_source(path: &Path) -> Result<(DataFrame, CsvDialect)> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let (text, dialect) = decode(&bytes);
    let header = text.lines().next().unwrap_or_default();
    let separator = char::from(dialect.separator);
    if header.split(separator).all(|name| name.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        encoding = dialect.encoding,
        separator = %separator,
        "decoded CSV source"
    );

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(dialect.separator))
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let headers = unique_headers(
        df.get_column_names()
            .iter()
            .map(|name| Some(name.to_string())),
    );
    df.set_column_names(headers)?;

    Ok((df, dialect))
}
