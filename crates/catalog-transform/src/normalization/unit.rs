//! Commercial unit resolution.

use crate::tables::{DEFAULT_UNIT_CODE, FRACTIONABLE_UNITS, UNIT_CODES};

/// How a unit cell was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMatch {
    /// Blank or missing cell.
    Blank,
    /// Already a numeric unit code.
    Numeric,
    /// Abbreviation found in the unit table.
    Abbreviation,
    /// Text not in the unit table; the default code was used.
    Fallback,
}

/// Resolves a unit descriptor and reports how it matched.
pub fn resolve_unit_detailed(value: Option<&str>) -> (i64, UnitMatch) {
    let Some(value) = value else {
        return (DEFAULT_UNIT_CODE, UnitMatch::Blank);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return (DEFAULT_UNIT_CODE, UnitMatch::Blank);
    }
    if let Some(number) = trimmed.parse::<f64>().ok().filter(|n| n.is_finite()) {
        return (number.trunc() as i64, UnitMatch::Numeric);
    }
    match UNIT_CODES.get(trimmed.to_uppercase().as_str()) {
        Some(code) => (*code, UnitMatch::Abbreviation),
        None => (DEFAULT_UNIT_CODE, UnitMatch::Fallback),
    }
}

/// Resolves a unit descriptor to a unit code.
///
/// Numbers pass through as codes; abbreviations are looked up
/// case-insensitively; everything else becomes the "UN" code.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::resolve_unit;
///
/// assert_eq!(resolve_unit(Some("kg")), 4);
/// assert_eq!(resolve_unit(Some("28")), 28);
/// assert_eq!(resolve_unit(Some("caixa grande")), 5);
/// assert_eq!(resolve_unit(None), 5);
/// ```
pub fn resolve_unit(value: Option<&str>) -> i64 {
    resolve_unit_detailed(value).0
}

/// Returns true for divisible units (volume, mass, length, area).
pub fn is_fractionable(code: i64) -> bool {
    FRACTIONABLE_UNITS.contains(&code)
}
