//! Supplier product sheet ingestion.
//!
//! Loads a supplier spreadsheet into a text-only Polars DataFrame.
//!
//! # Features
//!
//! - **CSV Loading**: UTF-8 with `;` or Latin-1 with `,`, detected from the bytes
//! - **Workbook Loading**: first worksheet of `.xlsx`, `.xls`, `.xlsm` or `.ods`
//! - **Column Profiles**: filled counts and sample values to help write a mapping
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::{column_profiles, load_source};
//!
//! let source = load_source(Path::new("fornecedor.csv"))?;
//! for profile in column_profiles(&source.data) {
//!     println!("{} ({} filled)", profile.name, profile.filled);
//! }
//! ```

mod csv;
mod error;
mod headers;
mod profile;
mod source;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::{CsvDialect, read_csv_source};
pub use source::{SourceFormat, SourceTable, load_source};
pub use workbook::read_workbook_source;

// === Column Profiles ===
pub use profile::{ColumnProfile, column_profiles};
