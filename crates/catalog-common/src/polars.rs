//! Polars AnyValue and column utility functions.
//!
//! Every table in the workspace is text-typed: source cells are loaded as
//! strings and canonical cells are rendered as strings. These helpers keep
//! the conversions in one place.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use catalog_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("KG")), "KG");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use catalog_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(7891234567890.0), "7891234567890");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Extracts every cell of a column, keeping `None` for null cells.
pub fn column_values(column: &Column) -> Vec<Option<String>> {
    (0..column.len())
        .map(|idx| match column.get(idx) {
            Ok(AnyValue::Null) | Err(_) => None,
            Ok(value) => Some(any_to_string(value)),
        })
        .collect()
}

/// Counts cells that are neither null nor whitespace-only.
pub fn non_blank_count(column: &Column) -> usize {
    column_values(column)
        .iter()
        .filter(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
        .count()
}

/// Builds a text column from owned values.
pub fn text_column(name: &str, values: Vec<String>) -> Column {
    Series::new(name.into(), values).into_column()
}

/// Builds a nullable text column.
pub fn text_column_opt(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}
