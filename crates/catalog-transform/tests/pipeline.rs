//! End-to-end tests for canonical table construction.

use catalog_common::{column_values, text_column, text_column_opt};
use catalog_model::{CanonicalField, ColumnMapping};
use catalog_transform::{
    NormalizationError, normalize_catalog, normalize_catalog_with_blank_columns,
};
use polars::prelude::*;

fn s(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn cell(df: &DataFrame, field: CanonicalField, row: usize) -> String {
    let column = df.column(field.label()).unwrap();
    column_values(column)[row].clone().unwrap_or_default()
}

fn supplier_sheet() -> DataFrame {
    DataFrame::new(vec![
        text_column("Codigo", s(&["AB-001", "  ", "cd/002"])),
        text_column("Produto", s(&["Café 500g", "Sem código", "Açúcar 1kg"])),
        text_column("EAN", s(&["7891234567890.0", "", "789-100"])),
        text_column("Classificacao", s(&["0901.21.00", "", "1701.99.00.1"])),
        text_column("Unidade", s(&["kg", "un", "caixa grande"])),
        text_column("Origem", s(&["0", "", "Estrangeira Importação Direta Sem Similar"])),
        text_column("Preco", s(&["R$ 1.234,56", "2,00", ""])),
        text_column_opt(
            "Peso",
            vec![Some("0,5".to_string()), None, None],
        ),
    ])
    .unwrap()
}

fn supplier_mapping() -> ColumnMapping {
    ColumnMapping::new()
        .with(CanonicalField::Sku, "Codigo")
        .with(CanonicalField::Description, "Produto")
        .with(CanonicalField::Barcode, "EAN")
        .with(CanonicalField::Ncm, "Classificacao")
        .with(CanonicalField::CommercialUnit, "Unidade")
        .with(CanonicalField::Origin, "Origem")
        .with(CanonicalField::Price, "Preco")
        .with(CanonicalField::NetWeight, "Peso")
}

#[test]
fn blank_sku_rows_are_dropped() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();

    assert_eq!(catalog.data.height(), 2);
    assert_eq!(catalog.report.input_rows, 3);
    assert_eq!(catalog.report.output_rows, 2);
    assert_eq!(catalog.report.dropped_rows, 1);
    assert_eq!(cell(&catalog.data, CanonicalField::Sku, 0), "AB-001");
    assert_eq!(cell(&catalog.data, CanonicalField::Sku, 1), "cd002");
}

#[test]
fn output_has_canonical_columns_in_order() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();

    let names: Vec<String> = catalog
        .data
        .get_column_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, CanonicalField::labels());
    for column in catalog.data.get_columns() {
        assert_eq!(column.dtype(), &DataType::String);
        assert_eq!(column.null_count(), 0);
    }
}

#[test]
fn identifiers_are_sanitized() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();
    let df = &catalog.data;

    assert_eq!(cell(df, CanonicalField::Ncm, 0), "09012100");
    assert_eq!(cell(df, CanonicalField::Ncm, 1), "17019900");
    assert_eq!(cell(df, CanonicalField::Barcode, 0), "7891234567890");
    assert_eq!(cell(df, CanonicalField::Barcode, 1), "789100");
    assert_eq!(cell(df, CanonicalField::Description, 0), "Café 500g");
}

#[test]
fn units_and_fraction_flags() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();
    let df = &catalog.data;

    assert_eq!(cell(df, CanonicalField::CommercialUnit, 0), "4");
    assert_eq!(cell(df, CanonicalField::FractionUnit, 0), "1");
    assert_eq!(cell(df, CanonicalField::CommercialUnit, 1), "5");
    assert_eq!(cell(df, CanonicalField::FractionUnit, 1), "0");
    assert_eq!(catalog.report.unit_fallbacks, 1);
}

#[test]
fn origins_are_resolved() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();

    assert_eq!(cell(&catalog.data, CanonicalField::Origin, 0), "11");
    assert_eq!(cell(&catalog.data, CanonicalField::Origin, 1), "17");
    assert_eq!(catalog.report.origin_fallbacks, 0);
}

#[test]
fn unmapped_origin_defaults_to_national() {
    let mapping = ColumnMapping::new()
        .with(CanonicalField::Sku, "Codigo")
        .with(CanonicalField::Description, "Produto");

    let catalog = normalize_catalog(&supplier_sheet(), &mapping).unwrap();

    assert_eq!(cell(&catalog.data, CanonicalField::Origin, 0), "11");
    assert_eq!(cell(&catalog.data, CanonicalField::Origin, 1), "11");
    assert!(catalog.report.unmapped_fields.contains(&CanonicalField::Origin));
}

#[test]
fn mandatory_numbers_default_to_zero_and_optional_stay_blank() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();
    let df = &catalog.data;

    assert_eq!(cell(df, CanonicalField::Price, 0), "1234,56");
    assert_eq!(cell(df, CanonicalField::Price, 1), "");
    assert_eq!(cell(df, CanonicalField::NetWeight, 0), "0,50");
    assert_eq!(cell(df, CanonicalField::NetWeight, 1), "0,00");
    // unmapped: mandatory gross weight is filled, optional cost is not
    assert_eq!(cell(df, CanonicalField::GrossWeight, 0), "0,00");
    assert_eq!(cell(df, CanonicalField::Cost, 0), "");
    assert_eq!(cell(df, CanonicalField::Height, 1), "");

    assert_eq!(
        catalog.report.defaulted_cells.get(&CanonicalField::NetWeight),
        Some(&1)
    );
    assert_eq!(
        catalog.report.defaulted_cells.get(&CanonicalField::GrossWeight),
        Some(&2)
    );
    assert_eq!(catalog.report.defaulted_cells.get(&CanonicalField::Price), None);
}

#[test]
fn unmapped_free_text_mandatory_fields_are_reported() {
    let catalog = normalize_catalog(&supplier_sheet(), &supplier_mapping()).unwrap();

    assert_eq!(
        catalog.report.mandatory_gaps.get(&CanonicalField::DefaultRule),
        Some(&2)
    );
    assert_eq!(catalog.report.mandatory_gaps.get(&CanonicalField::Description), None);
    assert!(!catalog.report.is_complete());
}

#[test]
fn unparseable_numbers_are_counted() {
    let source = DataFrame::new(vec![
        text_column("SKU", s(&["A1", "A2"])),
        text_column("Custo", s(&["abc", "3"])),
    ])
    .unwrap();
    let mapping = ColumnMapping::new()
        .with(CanonicalField::Sku, "SKU")
        .with(CanonicalField::Cost, "Custo");

    let catalog = normalize_catalog(&source, &mapping).unwrap();

    assert_eq!(cell(&catalog.data, CanonicalField::Cost, 0), "");
    assert_eq!(cell(&catalog.data, CanonicalField::Cost, 1), "3,00");
    assert_eq!(
        catalog.report.unparsed_numbers.get(&CanonicalField::Cost),
        Some(&1)
    );
}

#[test]
fn mapped_fraction_column_is_overwritten() {
    let source = DataFrame::new(vec![
        text_column("SKU", s(&["A1"])),
        text_column("Un", s(&["LT"])),
        text_column("Fracao", s(&["0"])),
    ])
    .unwrap();
    let mapping = ColumnMapping::new()
        .with(CanonicalField::Sku, "SKU")
        .with(CanonicalField::CommercialUnit, "Un")
        .with(CanonicalField::FractionUnit, "Fracao");

    let catalog = normalize_catalog(&source, &mapping).unwrap();

    assert_eq!(cell(&catalog.data, CanonicalField::FractionUnit, 0), "1");
}

#[test]
fn missing_source_column_is_an_error() {
    let mapping = ColumnMapping::new().with(CanonicalField::Sku, "Nope");

    let result = normalize_catalog(&supplier_sheet(), &mapping);

    assert!(matches!(result, Err(NormalizationError::ColumnNotFound(name)) if name == "Nope"));
}

#[test]
fn dropped_blank_column_reads_as_blank() {
    let mapping = ColumnMapping::new()
        .with(CanonicalField::Sku, "Codigo")
        .with(CanonicalField::Cost, "Custo")
        .with(CanonicalField::Brand, "Marca");
    let blank = vec!["Custo".to_string(), "Marca".to_string()];

    let catalog = normalize_catalog_with_blank_columns(&supplier_sheet(), &mapping, &blank).unwrap();

    assert_eq!(catalog.data.height(), 2);
    assert_eq!(cell(&catalog.data, CanonicalField::Cost, 0), "");
    assert_eq!(cell(&catalog.data, CanonicalField::Brand, 1), "");
    assert!(!catalog.report.unmapped_fields.contains(&CanonicalField::Cost));
}

#[test]
fn blank_column_list_does_not_hide_unknown_columns() {
    let mapping = ColumnMapping::new().with(CanonicalField::Sku, "Nope");
    let blank = vec!["Custo".to_string()];

    let result = normalize_catalog_with_blank_columns(&supplier_sheet(), &mapping, &blank);

    assert!(matches!(result, Err(NormalizationError::ColumnNotFound(name)) if name == "Nope"));
}

#[test]
fn empty_source_yields_empty_table() {
    let source = DataFrame::new(vec![text_column("SKU", Vec::new())]).unwrap();
    let mapping = ColumnMapping::new().with(CanonicalField::Sku, "SKU");

    let catalog = normalize_catalog(&source, &mapping).unwrap();

    assert_eq!(catalog.data.height(), 0);
    assert_eq!(catalog.data.width(), 22);
}
