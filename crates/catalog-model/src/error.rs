//! Error types for the catalog model.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or validating a column mapping.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Name does not match any canonical field key or label.
    #[error("unknown canonical field '{name}'")]
    UnknownField { name: String },

    /// `FIELD=COLUMN` override without the separator or with an empty side.
    #[error("invalid mapping override '{value}' (expected FIELD=COLUMN)")]
    InvalidOverride { value: String },

    /// Mapping file could not be read.
    #[error("failed to read mapping file {path}: {source}")]
    MappingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file maps one field from two keys.
    #[error("field '{field}' is mapped twice (to '{first}' and '{second}')")]
    DuplicateField {
        field: String,
        first: String,
        second: String,
    },

    /// Mapping file is not valid TOML or has the wrong shape.
    #[error("invalid mapping file: {message}")]
    MappingParse { message: String },

    /// Mapped source column does not exist in the loaded table.
    #[error("field '{field}' is mapped to column '{column}', which is not in the source table")]
    MissingSourceColumn { field: String, column: String },
}

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        Self::MappingParse {
            message: err.to_string(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::MissingSourceColumn {
            field: "sku".to_string(),
            column: "Codigo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field 'sku' is mapped to column 'Codigo', which is not in the source table"
        );
    }
}
