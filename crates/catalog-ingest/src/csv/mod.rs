//! CSV reading utilities.

mod dialect;
mod reader;

pub use dialect::CsvDialect;
pub use reader::read_csv_source;
