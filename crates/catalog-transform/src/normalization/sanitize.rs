//! Identifier sanitizers.

/// Length of an NCM fiscal classification code.
pub const NCM_LENGTH: usize = 8;

/// Cleans a SKU down to ASCII letters, digits and hyphens.
///
/// A missing cell yields an empty string; rows with an empty SKU are dropped
/// by the pipeline.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::clean_sku;
///
/// assert_eq!(clean_sku(Some("  AB-12/3 ")), "AB-123");
/// assert_eq!(clean_sku(Some("***")), "");
/// assert_eq!(clean_sku(None), "");
/// ```
pub fn clean_sku(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    value
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
        .collect()
}

/// Keeps the digits of an NCM code, truncated to its 8-digit length.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::clean_ncm;
///
/// assert_eq!(clean_ncm(Some("2202.10.00")), "22021000");
/// assert_eq!(clean_ncm(Some("1905.90.90.99")), "19059090");
/// ```
pub fn clean_ncm(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(NCM_LENGTH)
        .collect()
}

/// Keeps the digits of a barcode (EAN/GTIN).
///
/// A number rendered with a zero fraction (`7891234567890.0`) is read as
/// the integer it stands for, so the fraction digits are not glued onto
/// the code.
pub fn clean_barcode(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let trimmed = value.trim();
    let integral = match trimmed.split_once('.') {
        Some((whole, fraction))
            if !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.bytes().all(|b| b == b'0') =>
        {
            whole
        }
        _ => trimmed,
    };
    integral.chars().filter(char::is_ascii_digit).collect()
}
