//! Import sheet output.
//!
//! The canonical table is text-only, so both writers emit every cell as a
//! string. Barcodes and NCM codes therefore keep all their digits.
//!
//! - **workbook**: the importer's native XLSX layout
//! - **delimited**: semicolon-separated UTF-8 for spreadsheet tools in pt-BR

mod common;
mod delimited;
mod error;
mod workbook;

pub use common::{OutputFormat, ensure_parent_dir, write_output};
pub use delimited::write_csv;
pub use error::{OutputError, Result};
pub use workbook::{COLUMN_WIDTH, SHEET_NAME, write_xlsx};
