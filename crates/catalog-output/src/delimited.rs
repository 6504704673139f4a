//! CSV writer.

use std::path::Path;

use csv::WriterBuilder;
use polars::prelude::DataFrame;

use crate::common::string_columns;
use crate::error::{OutputError, Result};

/// Writes the table as UTF-8, `;`-separated, with a header row.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let (names, columns) = string_columns(df);
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(csv_error)?;

    writer.write_record(&names).map_err(csv_error)?;
    for row in 0..df.height() {
        writer
            .write_record(columns.iter().map(|values| values[row].as_str()))
            .map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|e| csv_error(csv::Error::from(e)))?;

    tracing::debug!(path = %path.display(), rows = df.height(), "wrote CSV");
    Ok(())
}
