//! Header name cleanup shared by the CSV and workbook readers.

use std::collections::BTreeSet;

pub(crate) const UNNAMED_PREFIX: &str = "Unnamed: ";

/// Trims header names, fills blank ones and de-duplicates repeated names.
pub(crate) fn unique_headers(names: impl Iterator<Item = Option<String>>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut headers = Vec::new();
    for (idx, name) in names.enumerate() {
        let base = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("{UNNAMED_PREFIX}{idx}"));
        let mut candidate = base.clone();
        let mut suffix = 1;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        headers.push(candidate);
    }
    headers
}
