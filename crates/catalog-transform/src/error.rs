//! Error types for catalog normalization.

use thiserror::Error;

/// Errors raised while building the canonical table.
///
/// The field rules themselves never fail; only table access can.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// A mapped column does not exist in the source DataFrame.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
