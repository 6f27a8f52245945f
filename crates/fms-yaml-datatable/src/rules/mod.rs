//! Built-in data_table entry rules, in the order they run.

pub mod factor;
pub mod fieldname;
pub mod gridname;
pub mod interp_method;
pub mod region;

pub use factor::FactorRule;
pub use fieldname::FieldnameCodeRule;
pub use gridname::GridnameRule;
pub use interp_method::{FileInterpRule, InterpMethodRule};
pub use region::RegionRule;

/// Build an entry from a YAML mapping snippet.
#[cfg(test)]
pub(crate) fn entry_from_yaml(yaml: &str) -> crate::DataTableEntry {
    serde_yaml::from_str(yaml).unwrap()
}
