//! Static crosswalk tables.
//!
//! Built once on first use and never mutated.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Unit code for "UN" (unit/each); the fallback for anything unresolved.
pub const DEFAULT_UNIT_CODE: i64 = 5;

/// Origin code for "Outros" (unclassified); returned for blank or unknown input.
pub const ORIGIN_UNCLASSIFIED: i64 = 10;

/// Origin code for a plain national product; used when no origin column is mapped.
pub const ORIGIN_NATIONAL: i64 = 11;

/// Unit abbreviation (upper case) to unit code.
pub static UNIT_CODES: LazyLock<HashMap<&'static str, i64>> = LazyLock::new(|| {
    HashMap::from([
        // volume
        ("ML", 1),
        ("LT", 2),
        ("KL", 7),
        ("M3", 30),
        // mass
        ("GR", 3),
        ("KG", 4),
        // length and area
        ("M", 28),
        ("M2", 29),
        // counts and packaging
        ("UN", 5),
        ("DZ", 6),
        ("PC", 8),
        ("PT", 9),
        ("PR", 10),
        ("BDJ", 11),
        ("BAG", 12),
        ("BLD", 13),
        ("BR", 14),
        ("CX", 15),
        ("FD", 25),
    ])
});

/// Unit codes for continuously divisible measures (volume, mass, length, area).
pub static FRACTIONABLE_UNITS: LazyLock<HashSet<i64>> =
    LazyLock::new(|| HashSet::from([2, 4, 7, 28, 29, 30]));

/// National origin classification (0-8) to the importer's origin code.
///
/// 8 (import content above 70%) maps to the composite code 1227.
pub static ORIGIN_CROSSWALK: LazyLock<HashMap<i64, i64>> = LazyLock::new(|| {
    HashMap::from([
        (0, 11),
        (1, 12),
        (2, 13),
        (3, 14),
        (4, 15),
        (5, 16),
        (6, 17),
        (7, 18),
        (8, 1227),
    ])
});

/// Returns true if `code` is already an importer origin code.
///
/// The unclassified code counts, so converted sheets pass through unchanged.
pub fn is_target_origin_code(code: i64) -> bool {
    code == ORIGIN_UNCLASSIFIED || ORIGIN_CROSSWALK.values().any(|target| *target == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractionable_units_are_known_codes() {
        for code in FRACTIONABLE_UNITS.iter() {
            assert!(UNIT_CODES.values().any(|value| value == code));
        }
    }

    #[test]
    fn default_unit_is_un() {
        assert_eq!(UNIT_CODES.get("UN"), Some(&DEFAULT_UNIT_CODE));
        assert!(!FRACTIONABLE_UNITS.contains(&DEFAULT_UNIT_CODE));
    }

    #[test]
    fn crosswalk_covers_all_classifications() {
        for classification in 0..=8 {
            assert!(ORIGIN_CROSSWALK.contains_key(&classification));
        }
        assert_eq!(ORIGIN_CROSSWALK.get(&0), Some(&ORIGIN_NATIONAL));
    }

    #[test]
    fn target_codes_pass_through() {
        assert!(is_target_origin_code(1227));
        assert!(is_target_origin_code(10));
        assert!(is_target_origin_code(18));
        assert!(!is_target_origin_code(9));
        assert!(!is_target_origin_code(0));
    }
}
