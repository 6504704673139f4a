use std::path::PathBuf;

use catalog_ingest::SourceFormat;
use catalog_transform::NormalizationReport;
use polars::prelude::DataFrame;

/// Outcome of a `normalize` run.
#[derive(Debug)]
pub struct NormalizeResult {
    pub input: PathBuf,
    pub source_format: SourceFormat,
    /// Source columns dropped because they were blank in every row.
    pub dropped_columns: Vec<String>,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub data: DataFrame,
    pub report: NormalizationReport,
}
