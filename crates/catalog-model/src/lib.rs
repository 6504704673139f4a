//! Canonical catalog data model.
//!
//! - **field**: the 22 canonical fields, their output labels and the
//!   mandatory field set
//! - **mapping**: column mapping from canonical fields to source columns
//! - **error**: model-level errors

pub mod error;
pub mod field;
pub mod mapping;

pub use error::{ModelError, Result};
pub use field::{CanonicalField, FieldKind, MONETARY_FIELDS};
pub use mapping::ColumnMapping;
