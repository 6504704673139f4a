//! Property tests for the field rules.

use catalog_transform::normalization::{
    clean_barcode, clean_ncm, clean_sku, format_money, is_fractionable, parse_money,
    resolve_origin, resolve_unit,
};
use catalog_transform::tables::{ORIGIN_CROSSWALK, is_target_origin_code};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sku_only_keeps_allowed_characters(input in ".*") {
        let cleaned = clean_sku(Some(input.as_str()));
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        prop_assert_eq!(clean_sku(Some(cleaned.as_str())), cleaned.clone());
    }

    #[test]
    fn ncm_is_at_most_eight_digits(input in ".*") {
        let cleaned = clean_ncm(Some(input.as_str()));
        prop_assert!(cleaned.len() <= 8);
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn barcode_is_digits_only(input in ".*") {
        let cleaned = clean_barcode(Some(input.as_str()));
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn formatted_money_parses_back(cents in -10_000_000i64..10_000_000i64) {
        let value = cents as f64 / 100.0;
        let formatted = format_money(Some(value));
        let (_, decimals) = formatted.split_once(',').unwrap();
        prop_assert_eq!(decimals.len(), 2);
        let reparsed = parse_money(Some(formatted.as_str())).unwrap();
        prop_assert!((reparsed - value).abs() < 0.005);
    }

    #[test]
    fn parse_money_never_panics(input in ".*") {
        let _ = parse_money(Some(input.as_str()));
    }

    #[test]
    fn unit_resolution_is_total(input in ".*") {
        let code = resolve_unit(Some(input.as_str()));
        let _ = is_fractionable(code);
    }

    #[test]
    fn text_origins_land_in_target_domain(input in "[A-Za-z ]*") {
        let code = resolve_origin(Some(input.as_str()));
        prop_assert!(is_target_origin_code(code));
    }

    #[test]
    fn classification_codes_use_crosswalk(code in 0i64..=8) {
        let resolved = resolve_origin(Some(code.to_string().as_str()));
        prop_assert_eq!(Some(&resolved), ORIGIN_CROSSWALK.get(&code));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(clean_sku(Some("  AB-12/3 ")), "AB-123");
    assert_eq!(clean_ncm(Some("2202.10.00")), "22021000");
    assert_eq!(parse_money(Some("R$ 1.234,56")), Some(1234.56));
    assert_eq!(format_money(Some(0.0)), "0,00");
    assert_eq!(resolve_unit(Some("kg")), 4);
    assert!(is_fractionable(4));
    assert!(!is_fractionable(5));
    assert_eq!(resolve_origin(Some("Nacional")), 11);
    assert_eq!(resolve_origin(Some("Estrangeira Importação Direta Sem Similar")), 17);
    assert_eq!(resolve_origin(None), 10);
}
