use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelError, Result};
use crate::field::CanonicalField;

/// Association of canonical fields to source column names.
///
/// At most one source column per field. Fields without an entry are
/// treated as blank for every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: BTreeMap<CanonicalField, String>,
}

/// On-disk shape of a mapping file.
#[derive(Debug, Deserialize)]
struct MappingFile {
    #[serde(default)]
    columns: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `field` to `column`, replacing any previous source column.
    pub fn insert(&mut self, field: CanonicalField, column: impl Into<String>) -> Option<String> {
        self.columns.insert(field, column.into())
    }

    #[must_use]
    pub fn with(mut self, field: CanonicalField, column: impl Into<String>) -> Self {
        self.insert(field, column);
        self
    }

    pub fn source_for(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    pub fn is_mapped(&self, field: CanonicalField) -> bool {
        self.columns.contains_key(&field)
    }

    /// Mapped entries in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.columns
            .iter()
            .map(|(field, column)| (*field, column.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Parses a TOML mapping document.
    ///
    /// ```toml
    /// [columns]
    /// sku = "Codigo"
    /// "Peso Bruto" = "Peso (kg)"
    /// ```
    ///
    /// Empty column names are skipped so a template can leave fields unset.
    /// Two keys naming the same field (say `sku` and `"SKU Externo"`) are an
    /// error.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: MappingFile = toml::from_str(text)?;
        let mut mapping = Self::new();
        for (name, column) in file.columns {
            let field: CanonicalField = name.parse()?;
            let column = column.trim();
            if column.is_empty() {
                continue;
            }
            if let Some(first) = mapping.insert(field, column) {
                return Err(ModelError::DuplicateField {
                    field: field.key().to_string(),
                    first,
                    second: column.to_string(),
                });
            }
        }
        Ok(mapping)
    }

    /// Reads and parses a TOML mapping file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::MappingRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies a `FIELD=COLUMN` override.
    pub fn apply_override(&mut self, entry: &str) -> Result<()> {
        let (name, column) = entry
            .split_once('=')
            .map(|(name, column)| (name.trim(), column.trim()))
            .filter(|(name, column)| !name.is_empty() && !column.is_empty())
            .ok_or_else(|| ModelError::InvalidOverride {
                value: entry.to_string(),
            })?;
        let field: CanonicalField = name.parse()?;
        self.insert(field, column);
        Ok(())
    }

    /// Checks that every mapped source column exists in `source_columns`.
    pub fn validate_against(&self, source_columns: &[String]) -> Result<()> {
        for (field, column) in self.iter() {
            if !source_columns.iter().any(|name| name == column) {
                return Err(ModelError::MissingSourceColumn {
                    field: field.key().to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}
