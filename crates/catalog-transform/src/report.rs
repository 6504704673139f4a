//! Per-run normalization statistics.

use std::collections::BTreeMap;

use catalog_model::CanonicalField;

/// What the pipeline changed or could not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Rows removed because their SKU was blank after cleaning.
    pub dropped_rows: usize,
    /// Canonical fields with no source column.
    pub unmapped_fields: Vec<CanonicalField>,
    /// Mandatory numeric cells filled with zero.
    pub defaulted_cells: BTreeMap<CanonicalField, usize>,
    /// Non-blank numeric cells that did not parse and were treated as blank.
    pub unparsed_numbers: BTreeMap<CanonicalField, usize>,
    /// Non-blank unit descriptors that fell back to the default unit.
    pub unit_fallbacks: usize,
    /// Non-blank origin descriptors that fell back to the unclassified code.
    pub origin_fallbacks: usize,
    /// Mandatory cells still blank in the output (free-text fields have no default).
    pub mandatory_gaps: BTreeMap<CanonicalField, usize>,
}

impl NormalizationReport {
    pub fn total_defaulted(&self) -> usize {
        self.defaulted_cells.values().sum()
    }

    pub fn total_mandatory_gaps(&self) -> usize {
        self.mandatory_gaps.values().sum()
    }

    /// Returns true when every mandatory cell ended up filled.
    pub fn is_complete(&self) -> bool {
        self.total_mandatory_gaps() == 0
    }
}
