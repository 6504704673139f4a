//! Canonical table construction.
//!
//! Projects the mapped source columns onto the 22 canonical fields, then
//! applies the field rules in a fixed order: SKU cleaning and row
//! filtering, NCM and barcode cleaning, unit resolution with the derived
//! fraction flag, origin resolution, and numeric parse/default/format.
//! Free-text fields pass through unchanged.

use std::collections::BTreeMap;

use catalog_common::{column_values, redact_value, text_column};
use catalog_model::{CanonicalField, ColumnMapping, MONETARY_FIELDS};
use polars::prelude::*;

use crate::error::{NormalizationError, Result};
use crate::normalization::{
    OriginMatch, UnitMatch, clean_barcode, clean_ncm, clean_sku, default_if_mandatory,
    format_money, is_fractionable, parse_money, resolve_origin_detailed, resolve_unit_detailed,
};
use crate::report::NormalizationReport;
use crate::tables::ORIGIN_NATIONAL;

/// Canonical table plus what happened while building it.
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    /// 22 text columns named by their output labels, in canonical order.
    pub data: DataFrame,
    pub report: NormalizationReport,
}

/// Working copy of the canonical columns; `None` is a blank cell.
type Cells = BTreeMap<CanonicalField, Vec<Option<String>>>;

/// Builds the canonical import table from a text-only source table.
///
/// Every mapped column must exist in `source`. Rows whose SKU is blank after
/// cleaning are dropped. Mandatory numeric fields are zero-filled; optional
/// ones stay blank.
pub fn normalize_catalog(source: &DataFrame, mapping: &ColumnMapping) -> Result<NormalizedCatalog> {
    normalize_catalog_with_blank_columns(source, mapping, &[])
}

/// Same as [`normalize_catalog`], but mapped columns named in
/// `blank_columns` may be absent from `source` and read as all blank.
///
/// Pass the columns the loader dropped for having no values.
pub fn normalize_catalog_with_blank_columns(
    source: &DataFrame,
    mapping: &ColumnMapping,
    blank_columns: &[String],
) -> Result<NormalizedCatalog> {
    let input_rows = source.height();
    let mut report = NormalizationReport {
        input_rows,
        ..NormalizationReport::default()
    };

    if !mapping.is_mapped(CanonicalField::Sku) {
        tracing::warn!("no SKU column mapped; every row will be dropped");
    }
    let mut cells = project(source, mapping, blank_columns, &mut report)?;

    let keep = filter_by_sku(&mut cells, &mut report);
    retain_rows(&mut cells, &keep);
    let row_count = keep.iter().filter(|kept| **kept).count();

    if mapping.is_mapped(CanonicalField::Ncm) {
        clean_column(&mut cells, CanonicalField::Ncm, clean_ncm);
    }
    if mapping.is_mapped(CanonicalField::Barcode) {
        clean_column(&mut cells, CanonicalField::Barcode, clean_barcode);
    }
    resolve_units(&mut cells, &mut report);
    resolve_origins(&mut cells, mapping.is_mapped(CanonicalField::Origin), row_count, &mut report);
    for field in MONETARY_FIELDS {
        normalize_numeric(&mut cells, field, &mut report);
    }

    for field in CanonicalField::ALL {
        if !field.is_mandatory() {
            continue;
        }
        let blanks = cells
            .get(&field)
            .map_or(row_count, |values| values.iter().filter(|v| is_blank(v.as_deref())).count());
        if blanks > 0 {
            tracing::warn!(field = %field, rows = blanks, "mandatory field left blank");
            report.mandatory_gaps.insert(field, blanks);
        }
    }

    report.output_rows = row_count;
    let data = finalize(cells, row_count)?;

    tracing::info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        dropped_rows = report.dropped_rows,
        defaulted = report.total_defaulted(),
        "catalog normalized"
    );

    Ok(NormalizedCatalog { data, report })
}

/// Copies each mapped source column into its canonical slot.
fn project(
    source: &DataFrame,
    mapping: &ColumnMapping,
    blank_columns: &[String],
    report: &mut NormalizationReport,
) -> Result<Cells> {
    let row_count = source.height();
    let mut cells = Cells::new();
    for field in CanonicalField::ALL {
        let values = match mapping.source_for(field) {
            Some(column_name) => match source.column(column_name) {
                Ok(column) => {
                    tracing::debug!(field = %field, source = %column_name, "mapped field");
                    column_values(column)
                }
                Err(_) if blank_columns.iter().any(|name| name == column_name) => {
                    tracing::debug!(field = %field, source = %column_name, "mapped column is blank");
                    vec![None; row_count]
                }
                Err(_) => {
                    return Err(NormalizationError::ColumnNotFound(column_name.to_string()));
                }
            },
            None => {
                report.unmapped_fields.push(field);
                vec![None; row_count]
            }
        };
        cells.insert(field, values);
    }
    Ok(cells)
}

/// Cleans the SKU column and returns the rows to keep.
fn filter_by_sku(cells: &mut Cells, report: &mut NormalizationReport) -> Vec<bool> {
    let Some(values) = cells.get_mut(&CanonicalField::Sku) else {
        return Vec::new();
    };
    let mut keep = Vec::with_capacity(values.len());
    for value in values.iter_mut() {
        let cleaned = clean_sku(value.as_deref());
        keep.push(!cleaned.is_empty());
        *value = Some(cleaned);
    }
    report.dropped_rows = keep.iter().filter(|kept| !**kept).count();
    if report.dropped_rows > 0 {
        tracing::debug!(rows = report.dropped_rows, "dropped rows with blank SKU");
    }
    keep
}

fn retain_rows(cells: &mut Cells, keep: &[bool]) {
    for values in cells.values_mut() {
        let mut mask = keep.iter();
        values.retain(|_| mask.next().copied().unwrap_or(false));
    }
}

fn clean_column(cells: &mut Cells, field: CanonicalField, clean: fn(Option<&str>) -> String) {
    if let Some(values) = cells.get_mut(&field) {
        for value in values.iter_mut() {
            *value = Some(clean(value.as_deref()));
        }
    }
}

/// Resolves unit codes and overwrites the fraction flag from them.
fn resolve_units(cells: &mut Cells, report: &mut NormalizationReport) {
    let Some(units) = cells.get_mut(&CanonicalField::CommercialUnit) else {
        return;
    };
    let mut flags = Vec::with_capacity(units.len());
    for value in units.iter_mut() {
        let (code, matched) = resolve_unit_detailed(value.as_deref());
        if matched == UnitMatch::Fallback {
            tracing::trace!(
                value = redact_value(value.as_deref().unwrap_or_default()),
                "unknown unit, using default"
            );
            report.unit_fallbacks += 1;
        }
        let flag = if is_fractionable(code) { "1" } else { "0" };
        flags.push(Some(flag.to_string()));
        *value = Some(code.to_string());
    }
    cells.insert(CanonicalField::FractionUnit, flags);
}

/// Resolves origins, or sets the national code everywhere when unmapped.
fn resolve_origins(
    cells: &mut Cells,
    mapped: bool,
    row_count: usize,
    report: &mut NormalizationReport,
) {
    if !mapped {
        cells.insert(
            CanonicalField::Origin,
            vec![Some(ORIGIN_NATIONAL.to_string()); row_count],
        );
        return;
    }
    let Some(values) = cells.get_mut(&CanonicalField::Origin) else {
        return;
    };
    for value in values.iter_mut() {
        let (code, matched) = resolve_origin_detailed(value.as_deref());
        if matched == OriginMatch::Unclassified {
            tracing::trace!(
                value = redact_value(value.as_deref().unwrap_or_default()),
                "unrecognized origin, using unclassified code"
            );
            report.origin_fallbacks += 1;
        }
        *value = Some(code.to_string());
    }
}

/// Parses, defaults and formats one money/measure column.
fn normalize_numeric(cells: &mut Cells, field: CanonicalField, report: &mut NormalizationReport) {
    let Some(values) = cells.get_mut(&field) else {
        return;
    };
    let mandatory = field.is_mandatory();
    let mut defaulted = 0usize;
    let mut unparsed = 0usize;
    for value in values.iter_mut() {
        let parsed = parse_money(value.as_deref());
        if parsed.is_none() && !is_blank(value.as_deref()) {
            unparsed += 1;
        }
        if parsed.is_none() && mandatory {
            defaulted += 1;
        }
        let formatted = format_money(default_if_mandatory(parsed, mandatory));
        *value = (!formatted.is_empty()).then_some(formatted);
    }
    if defaulted > 0 {
        report.defaulted_cells.insert(field, defaulted);
    }
    if unparsed > 0 {
        tracing::debug!(field = %field, cells = unparsed, "unparseable numbers treated as blank");
        report.unparsed_numbers.insert(field, unparsed);
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Renders the working cells as 22 text columns; blanks become "".
fn finalize(mut cells: Cells, row_count: usize) -> Result<DataFrame> {
    let columns: Vec<Column> = CanonicalField::ALL
        .iter()
        .map(|field| {
            let values = cells
                .remove(field)
                .unwrap_or_else(|| vec![None; row_count])
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect();
            text_column(field.label(), values)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}
