//! Column profiles for writing a mapping file.

use catalog_common::column_values;
use polars::prelude::*;

/// Summary of one source column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: String,
    /// Cells that are neither null nor whitespace-only.
    pub filled: usize,
    pub total: usize,
    /// First non-blank value, trimmed.
    pub sample: Option<String>,
}

/// Builds one profile per column, in source order.
pub fn column_profiles(df: &DataFrame) -> Vec<ColumnProfile> {
    df.get_columns()
        .iter()
        .map(|column| {
            let values = column_values(column);
            let mut filled = 0usize;
            let mut sample = None;
            for value in values.iter().flatten() {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    continue;
                }
                filled += 1;
                if sample.is_none() {
                    sample = Some(trimmed.to_string());
                }
            }
            ColumnProfile {
                name: column.name().to_string(),
                filled,
                total: values.len(),
                sample,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_common::text_column_opt;

    #[test]
    fn profiles_count_filled_cells() {
        let df = DataFrame::new(vec![
            text_column_opt(
                "Codigo",
                vec![None, Some(" A1 ".to_string()), Some("A2".to_string())],
            ),
            text_column_opt("Obs", vec![None, Some(" ".to_string()), None]),
        ])
        .unwrap();

        let profiles = column_profiles(&df);

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].name, "Codigo");
        assert_eq!(profiles[0].filled, 2);
        assert_eq!(profiles[0].total, 3);
        assert_eq!(profiles[0].sample.as_deref(), Some("A1"));
        assert_eq!(profiles[1].filled, 0);
        assert_eq!(profiles[1].sample, None);
    }
}
