//! Format dispatch and shared helpers.

use std::fmt;
use std::fs;
use std::path::Path;

use catalog_common::column_values;
use polars::prelude::DataFrame;

use crate::delimited::write_csv;
use crate::error::{OutputError, Result};
use crate::workbook::write_xlsx;

/// Output file format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(OutputError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xlsx => write!(f, "XLSX"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Writes the table in the format implied by `path`.
pub fn write_output(df: &DataFrame, path: &Path) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path)?;
    ensure_parent_dir(path)?;
    match format {
        OutputFormat::Xlsx => write_xlsx(df, path)?,
        OutputFormat::Csv => write_csv(df, path)?,
    }
    tracing::info!(
        path = %path.display(),
        format = %format,
        rows = df.height(),
        "import sheet written"
    );
    Ok(format)
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Column names plus cells as strings, null cells as "".
pub(crate) fn string_columns(df: &DataFrame) -> (Vec<String>, Vec<Vec<String>>) {
    let mut names = Vec::with_capacity(df.width());
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        names.push(column.name().to_string());
        columns.push(
            column_values(column)
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
        );
    }
    (names, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/importacao.XLSX")).unwrap(),
            OutputFormat::Xlsx
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("importacao.csv")).unwrap(),
            OutputFormat::Csv
        );
        assert!(matches!(
            OutputFormat::from_path(Path::new("importacao")),
            Err(OutputError::UnsupportedFormat { extension, .. }) if extension.is_empty()
        ));
    }
}
