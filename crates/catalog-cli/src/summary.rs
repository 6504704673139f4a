//! Terminal tables for run summaries, previews and field listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_common::column_values;
use catalog_ingest::ColumnProfile;
use catalog_model::{CanonicalField, FieldKind};
use catalog_transform::NormalizationReport;
use polars::prelude::DataFrame;

use crate::types::NormalizeResult;

pub fn print_summary(result: &NormalizeResult, preview: usize) {
    println!("Input: {} ({})", result.input.display(), result.source_format);
    if !result.dropped_columns.is_empty() {
        println!("Blank columns ignored: {}", result.dropped_columns.join(", "));
    }
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("{}", summary_table(&result.report));
    if !result.report.mandatory_gaps.is_empty() {
        println!();
        println!("Mandatory fields with blank cells:");
        println!("{}", gaps_table(&result.report));
    }
    if preview > 0 && result.data.height() > 0 {
        let shown = preview.min(result.data.height());
        println!();
        println!("Preview ({shown} of {} rows):", result.data.height());
        println!("{}", preview_table(&result.data, preview));
    }
}

/// Label/value pairs shown in the run summary.
pub fn summary_rows(report: &NormalizationReport) -> Vec<(&'static str, usize)> {
    vec![
        ("Input rows", report.input_rows),
        ("Output rows", report.output_rows),
        ("Dropped (blank SKU)", report.dropped_rows),
        ("Zero-filled cells", report.total_defaulted()),
        (
            "Unparsed numbers",
            report.unparsed_numbers.values().sum::<usize>(),
        ),
        ("Unit fallbacks", report.unit_fallbacks),
        ("Origin fallbacks", report.origin_fallbacks),
        ("Unmapped fields", report.unmapped_fields.len()),
        ("Mandatory gaps", report.total_mandatory_gaps()),
    ]
}

pub fn summary_table(report: &NormalizationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in summary_rows(report) {
        let warn = label == "Mandatory gaps" || label == "Unparsed numbers";
        let count_cell = if count == 0 {
            dim_cell(count)
        } else if warn {
            Cell::new(count)
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(label), count_cell]);
    }
    table
}

pub fn gaps_table(report: &NormalizationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Blank rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, count) in &report.mandatory_gaps {
        table.add_row(vec![
            Cell::new(field.key()),
            Cell::new(field.label()),
            Cell::new(count).fg(Color::Yellow),
        ]);
    }
    table
}

/// First `limit` rows of the canonical table.
pub fn preview_table(df: &DataFrame, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let rows = limit.min(df.height());
    let columns: Vec<Vec<Option<String>>> = df
        .get_columns()
        .iter()
        .map(column_values)
        .collect();
    for row in 0..rows {
        table.add_row(
            columns
                .iter()
                .map(|values| Cell::new(values[row].as_deref().unwrap_or_default()))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Short description of the rule applied to a field.
pub fn rule_description(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Identifier => "letters, digits and '-'; blank rows dropped",
        FieldKind::Barcode => "digits only",
        FieldKind::FiscalCode => "digits only, first 8",
        FieldKind::CommercialUnit => "unit code (default 5 = UN)",
        FieldKind::Origin => "origin code 10-18/1227 (unmapped: 11)",
        FieldKind::FractionUnit => "1 if unit is fractionable, else 0",
        FieldKind::Monetary => "0,00 format",
        FieldKind::Text => "copied",
    }
}

pub fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Mandatory"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in CanonicalField::ALL {
        let mandatory = if field.is_mandatory() {
            Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(field.key()),
            Cell::new(field.label()),
            mandatory,
            Cell::new(rule_description(field.kind())),
        ]);
    }
    table
}

pub fn profile_table(profiles: &[ColumnProfile]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Filled"),
        header_cell("Sample"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for profile in profiles {
        let sample = match &profile.sample {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(format!("{}/{}", profile.filled, profile.total)),
            sample,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
