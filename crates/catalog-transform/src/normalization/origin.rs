//! Fiscal origin resolution.
//!
//! Numeric descriptors go through the crosswalk first. Free text is then
//! classified by [`ORIGIN_RULES`], an ordered list where the first matching
//! rule wins.

use crate::tables::{ORIGIN_CROSSWALK, ORIGIN_UNCLASSIFIED, is_target_origin_code};

/// One text classification rule.
#[derive(Debug, Clone, Copy)]
pub struct OriginRule {
    /// Short name used in logs and reports.
    pub label: &'static str,
    /// Predicate over the upper-cased, trimmed descriptor.
    pub matches: fn(&str) -> bool,
    pub code: i64,
}

fn is_national(text: &str) -> bool {
    text.contains("NACIONAL")
}

fn is_foreign(text: &str) -> bool {
    text.contains("ESTRANGEIRA") || text.contains("IMPORTAD")
}

fn without_similar(text: &str) -> bool {
    text.contains("SEM SIMILAR")
}

fn is_direct(text: &str) -> bool {
    is_foreign(text) && text.contains("DIRETA")
}

fn is_domestic_market(text: &str) -> bool {
    is_foreign(text) && text.contains("INTERNO")
}

/// Text classification rules in priority order.
pub static ORIGIN_RULES: [OriginRule; 10] = [
    OriginRule {
        label: "national, foreign content above 40%",
        matches: |t| is_national(t) && (t.contains("MAIS DE 40") || t.contains("SUPERIOR A 40")),
        code: 14,
    },
    OriginRule {
        label: "national, foreign content below 40%",
        matches: |t| {
            is_national(t) && (t.contains("MENOS DE 40") || t.contains("INFERIOR OU IGUAL A 40"))
        },
        code: 16,
    },
    OriginRule {
        label: "national, basic production process",
        matches: |t| is_national(t) && (t.contains("BASICOS") || t.contains("BÁSICOS")),
        code: 15,
    },
    OriginRule {
        label: "national, import content above 70%",
        matches: |t| is_national(t) && (t.contains("MAIS DE 70") || t.contains("SUPERIOR A 70")),
        code: 1227,
    },
    OriginRule {
        label: "national",
        matches: is_national,
        code: 11,
    },
    OriginRule {
        label: "foreign, direct import without similar",
        matches: |t| is_direct(t) && without_similar(t),
        code: 17,
    },
    OriginRule {
        label: "foreign, direct import",
        matches: is_direct,
        code: 12,
    },
    OriginRule {
        label: "foreign, domestic market without similar",
        matches: |t| is_domestic_market(t) && without_similar(t),
        code: 18,
    },
    OriginRule {
        label: "foreign, domestic market",
        matches: is_domestic_market,
        code: 13,
    },
    OriginRule {
        label: "foreign",
        matches: is_foreign,
        code: 12,
    },
];

/// How an origin cell was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMatch {
    Blank,
    /// National classification 0-8 mapped through the crosswalk.
    Crosswalk,
    /// Already an importer origin code.
    PassThrough,
    /// Matched a text rule.
    Rule(&'static str),
    /// Nothing matched; the unclassified code was used.
    Unclassified,
}

/// Resolves an origin descriptor and reports which branch decided it.
pub fn resolve_origin_detailed(value: Option<&str>) -> (i64, OriginMatch) {
    let Some(value) = value else {
        return (ORIGIN_UNCLASSIFIED, OriginMatch::Blank);
    };
    let text = value.trim().to_uppercase();
    if text.is_empty() {
        return (ORIGIN_UNCLASSIFIED, OriginMatch::Blank);
    }

    if let Some(number) = text.parse::<f64>().ok().filter(|n| n.is_finite()) {
        let number = number.trunc() as i64;
        if let Some(code) = ORIGIN_CROSSWALK.get(&number) {
            return (*code, OriginMatch::Crosswalk);
        }
        if is_target_origin_code(number) {
            return (number, OriginMatch::PassThrough);
        }
    }

    ORIGIN_RULES
        .iter()
        .find(|rule| (rule.matches)(&text))
        .map_or((ORIGIN_UNCLASSIFIED, OriginMatch::Unclassified), |rule| {
            (rule.code, OriginMatch::Rule(rule.label))
        })
}

/// Resolves an origin descriptor to an importer origin code.
///
/// Never fails: blank or unrecognized input yields the unclassified code 10.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::resolve_origin;
///
/// assert_eq!(resolve_origin(Some("0")), 11);
/// assert_eq!(resolve_origin(Some("8")), 1227);
/// assert_eq!(resolve_origin(Some("Nacional mais de 40")), 14);
/// assert_eq!(resolve_origin(Some("Estrangeira Importação Direta Sem Similar")), 17);
/// assert_eq!(resolve_origin(Some("")), 10);
/// ```
pub fn resolve_origin(value: Option<&str>) -> i64 {
    resolve_origin_detailed(value).0
}
