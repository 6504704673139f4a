use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use catalog_ingest::{column_profiles, load_source};
use catalog_model::ColumnMapping;
use catalog_output::write_output;
use catalog_transform::normalize_catalog_with_blank_columns;

use crate::cli::{InspectArgs, NormalizeArgs};
use catalog_cli::summary::{fields_table, profile_table};
use catalog_cli::types::NormalizeResult;

pub fn run_fields() -> Result<()> {
    println!("{}", fields_table());
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let source = load_source(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    println!(
        "Input: {} ({}, {} rows)",
        source.path.display(),
        source.format,
        source.height()
    );
    if !source.dropped_columns.is_empty() {
        println!("Blank columns ignored: {}", source.dropped_columns.join(", "));
    }
    println!("{}", profile_table(&column_profiles(&source.data)));
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let span = info_span!("normalize", input = %args.input.display());
    let _guard = span.enter();

    let mapping = build_mapping(args.mapping.as_deref(), &args.map)?;
    if mapping.is_empty() {
        bail!("no columns mapped; pass --mapping FILE or --map FIELD=COLUMN");
    }

    let source = load_source(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    // Blank columns were dropped from the data but still exist in the file.
    mapping
        .validate_against(&source.headers)
        .context("check column mapping")?;
    info!(fields = mapping.len(), "column mapping validated");

    let catalog =
        normalize_catalog_with_blank_columns(&source.data, &mapping, &source.dropped_columns)
            .context("normalize catalog")?;

    let output = if args.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_output(&catalog.data, &path)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    Ok(NormalizeResult {
        input: source.path,
        source_format: source.format,
        dropped_columns: source.dropped_columns,
        output,
        data: catalog.data,
        report: catalog.report,
    })
}

/// Mapping file entries first, then `--map` overrides in order.
fn build_mapping(file: Option<&Path>, overrides: &[String]) -> Result<ColumnMapping> {
    let mut mapping = match file {
        Some(path) => ColumnMapping::from_toml_file(path)
            .with_context(|| format!("read mapping {}", path.display()))?,
        None => ColumnMapping::new(),
    };
    for entry in overrides {
        mapping
            .apply_override(entry)
            .with_context(|| format!("--map {entry}"))?;
    }
    Ok(mapping)
}

/// `<dir>/<stem>_importacao.xlsx` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalogo".to_string());
    input.with_file_name(format!("{stem}_importacao.xlsx"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::CanonicalField;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("dados/fornecedor.csv")),
            PathBuf::from("dados/fornecedor_importacao.xlsx")
        );
    }

    #[test]
    fn overrides_replace_file_entries() {
        let mapping = build_mapping(None, &["sku=Codigo".to_string(), "sku=Ref".to_string()])
            .unwrap();
        assert_eq!(mapping.source_for(CanonicalField::Sku), Some("Ref"));
    }

    #[test]
    fn mapped_blank_column_normalizes_to_blank() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("fornecedor.csv");
        std::fs::write(&input, "Codigo;Custo\nA1;\nA2;\n").unwrap();
        let args = NormalizeArgs {
            input,
            mapping: None,
            map: vec!["sku=Codigo".to_string(), "cost=Custo".to_string()],
            output: None,
            preview: 0,
            dry_run: true,
        };

        let result = run_normalize(&args).unwrap();

        assert_eq!(result.data.height(), 2);
        assert_eq!(result.dropped_columns, vec!["Custo".to_string()]);
        assert!(result.output.is_none());
    }

    #[test]
    fn bad_override_is_reported() {
        let error = build_mapping(None, &["sku".to_string()]).unwrap_err();
        assert!(error.to_string().contains("--map sku"));
    }
}
