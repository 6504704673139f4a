//! Catalog normalization engine.
//!
//! Turns a text-only supplier table plus a [`ColumnMapping`] into the
//! 22-column canonical import table.
//!
//! - **tables**: unit and origin crosswalks
//! - **normalization**: total, per-cell field rules
//! - **pipeline**: applies the rules column by column, filters rows and
//!   defaults mandatory numbers
//!
//! # Example
//!
//! ```
//! use catalog_common::text_column;
//! use catalog_model::{CanonicalField, ColumnMapping};
//! use catalog_transform::normalize_catalog;
//! use polars::prelude::DataFrame;
//!
//! let source = DataFrame::new(vec![
//!     text_column("Codigo", vec!["ab-1".to_string(), " ".to_string()]),
//!     text_column("Un", vec!["kg".to_string(), "un".to_string()]),
//! ])
//! .unwrap();
//! let mapping = ColumnMapping::new()
//!     .with(CanonicalField::Sku, "Codigo")
//!     .with(CanonicalField::CommercialUnit, "Un");
//!
//! let catalog = normalize_catalog(&source, &mapping).unwrap();
//! assert_eq!(catalog.data.height(), 1);
//! assert_eq!(catalog.report.dropped_rows, 1);
//! ```
//!
//! [`ColumnMapping`]: catalog_model::ColumnMapping

mod error;
mod pipeline;
mod report;

pub mod normalization;
pub mod tables;

pub use error::{NormalizationError, Result};
pub use pipeline::{NormalizedCatalog, normalize_catalog, normalize_catalog_with_blank_columns};
pub use report::NormalizationReport;
