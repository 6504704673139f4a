//! Shared utilities for catalog normalizer crates.
//!
//! This crate provides common utilities used across the workspace,
//! mostly Polars helpers for moving between text cells and columns, plus
//! the switch that keeps supplier values out of logs.

pub mod polars;
pub mod redact;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    any_to_string, column_values, format_numeric, non_blank_count, text_column, text_column_opt,
};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
