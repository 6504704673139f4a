//! Integration tests for source loading.

use std::fs;

use catalog_common::column_values;
use catalog_ingest::{IngestError, SourceFormat, column_profiles, load_source};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

#[test]
fn csv_source_drops_blank_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fornecedor.csv");
    fs::write(
        &path,
        "Codigo;Vazia;Descricao\nA-1;;Arroz 5kg\nA-2;  ;Feijao 1kg\n",
    )
    .unwrap();

    let source = load_source(&path).unwrap();

    assert!(matches!(source.format, SourceFormat::Csv(_)));
    assert_eq!(source.column_names(), vec!["Codigo", "Descricao"]);
    assert_eq!(source.dropped_columns, vec!["Vazia"]);
    assert_eq!(source.headers, vec!["Codigo", "Vazia", "Descricao"]);
    assert_eq!(source.height(), 2);
}

#[test]
fn csv_headers_are_trimmed_like_workbook_headers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fornecedor.csv");
    fs::write(&path, "Codigo ;Custo\nA1;5,00\n").unwrap();

    let source = load_source(&path).unwrap();

    assert_eq!(source.headers, vec!["Codigo", "Custo"]);
    assert_eq!(source.column_names(), vec!["Codigo", "Custo"]);
}

#[test]
fn csv_extension_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("FORNECEDOR.CSV");
    fs::write(&path, "Codigo;Descricao\nA-1;Arroz\n").unwrap();

    let source = load_source(&path).unwrap();

    assert_eq!(source.height(), 1);
}

#[test]
fn workbook_source_keeps_long_barcodes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("produtos.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Codigo").unwrap();
    sheet.write_string(0, 1, "EAN").unwrap();
    sheet.write_string(0, 2, "Custo").unwrap();
    sheet.write_string(1, 0, "A-1").unwrap();
    sheet.write_number(1, 1, 7891234567890.0).unwrap();
    sheet.write_number(1, 2, 12.5).unwrap();
    workbook.save(&path).unwrap();

    let source = load_source(&path).unwrap();

    assert!(matches!(source.format, SourceFormat::Workbook { .. }));
    let ean = column_values(source.data.column("EAN").unwrap());
    assert_eq!(ean, vec![Some("7891234567890".to_string())]);
    let cost = column_values(source.data.column("Custo").unwrap());
    assert_eq!(cost, vec![Some("12.5".to_string())]);
}

#[test]
fn profiles_follow_source_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fornecedor.csv");
    fs::write(&path, "Codigo;Peso\nA-1;\nA-2;1,5\n").unwrap();

    let source = load_source(&path).unwrap();
    let profiles = column_profiles(&source.data);

    assert_eq!(profiles[0].name, "Codigo");
    assert_eq!(profiles[0].filled, 2);
    assert_eq!(profiles[1].name, "Peso");
    assert_eq!(profiles[1].filled, 1);
    assert_eq!(profiles[1].sample.as_deref(), Some("1,5"));
}

#[test]
fn missing_csv_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = load_source(&dir.path().join("nao-existe.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
