//! Field-level normalization rules.
//!
//! Every function here is total: any input, including a missing cell,
//! produces a value.
//!
//! - **sanitize**: SKU, NCM and barcode cleaning
//! - **money**: Brazilian-locale number parsing and formatting
//! - **unit**: commercial unit codes and the fractionable flag
//! - **origin**: fiscal origin classification

pub mod money;
pub mod origin;
pub mod sanitize;
pub mod unit;

pub use money::{default_if_mandatory, format_money, parse_money};
pub use origin::{ORIGIN_RULES, OriginMatch, OriginRule, resolve_origin, resolve_origin_detailed};
pub use sanitize::{clean_barcode, clean_ncm, clean_sku};
pub use unit::{UnitMatch, is_fractionable, resolve_unit, resolve_unit_detailed};
