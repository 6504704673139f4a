//! XLSX writer.

use std::path::Path;

use polars::prelude::DataFrame;
use rust_xlsxwriter::{Format, Workbook};

use crate::common::string_columns;
use crate::error::{OutputError, Result};

/// Worksheet name the importer expects.
pub const SHEET_NAME: &str = "Importacao";

/// Width applied to every column.
pub const COLUMN_WIDTH: f64 = 18.0;

/// Last usable row index in an XLSX worksheet.
const MAX_ROWS: usize = 1_048_576;

/// Writes the table to a single-sheet workbook with a bold header row.
pub fn write_xlsx(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() >= MAX_ROWS {
        return Err(OutputError::TooManyRows {
            rows: df.height(),
            max: MAX_ROWS - 1,
        });
    }
    let xlsx_error = |source| OutputError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let (names, columns) = string_columns(df);
    let header = Format::new().set_bold();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    for (col_idx, (name, values)) in names.iter().zip(&columns).enumerate() {
        let col = u16::try_from(col_idx).unwrap_or(u16::MAX);
        worksheet
            .set_column_width(col, COLUMN_WIDTH)
            .map_err(xlsx_error)?;
        worksheet
            .write_string_with_format(0, col, name, &header)
            .map_err(xlsx_error)?;
        for (row_idx, value) in values.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            // bounded by MAX_ROWS above
            let row = (row_idx + 1) as u32;
            worksheet
                .write_string(row, col, value)
                .map_err(xlsx_error)?;
        }
    }

    workbook.save(path).map_err(xlsx_error)?;
    tracing::debug!(path = %path.display(), sheet = SHEET_NAME, "wrote workbook");
    Ok(())
}
