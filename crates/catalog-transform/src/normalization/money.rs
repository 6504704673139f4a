//! Brazilian-locale money and measure normalization.
//!
//! Values stay `Option<f64>` until formatting so an empty optional field is
//! never confused with zero.

/// Parses a money or measure cell.
///
/// Strips `R$` and spaces. When a comma is present it is the decimal
/// separator and dots are thousands separators. Blank cells and anything
/// that does not parse yield `None`.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::parse_money;
///
/// assert_eq!(parse_money(Some("10,50")), Some(10.5));
/// assert_eq!(parse_money(Some("R$ 1.234,56")), Some(1234.56));
/// assert_eq!(parse_money(Some("12.5")), Some(12.5));
/// assert_eq!(parse_money(Some("  ")), None);
/// assert_eq!(parse_money(Some("abc")), None);
/// ```
pub fn parse_money(value: Option<&str>) -> Option<f64> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    let stripped = value.replace("R$", "").replace(' ', "");
    let mut cleaned = stripped.trim().to_string();
    if cleaned.contains(',') {
        cleaned = cleaned.replace('.', "").replace(',', ".");
    }
    cleaned.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Formats a value with two decimals and a comma separator; `None` is blank.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::format_money;
///
/// assert_eq!(format_money(Some(12.5)), "12,50");
/// assert_eq!(format_money(Some(1234.567)), "1234,57");
/// assert_eq!(format_money(None), "");
/// ```
pub fn format_money(value: Option<f64>) -> String {
    match value {
        Some(number) if number.is_finite() => format!("{number:.2}").replace('.', ","),
        _ => String::new(),
    }
}

/// Fills a missing value with zero when the field is mandatory.
pub fn default_if_mandatory(value: Option<f64>, mandatory: bool) -> Option<f64> {
    match value {
        None if mandatory => Some(0.0),
        other => other,
    }
}
