//! CLI library components for the catalog normalizer.

pub mod logging;
pub mod summary;
pub mod types;
