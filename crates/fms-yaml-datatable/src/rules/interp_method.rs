//! Rules: interp-method, file-interp
//!
//! The interpolation method must be a known one, and an entry that reads
//! no field from file cannot ask for interpolation.

use serde_yaml::Value;

use crate::types::display_value;
use crate::{DataTableEntry, EntryRule, Violation};

pub const VALID_INTERP_METHODS: &[&str] = &["bilinear", "bicubic", "none"];

pub struct InterpMethodRule;

impl EntryRule for InterpMethodRule {
    fn id(&self) -> &str {
        "interp-method"
    }

    fn description(&self) -> &str {
        "interpol_method is required and must be bilinear, bicubic or none"
    }

    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation> {
        let value = entry
            .get("interpol_method")
            .ok_or(Violation::MissingKey("interpol_method"))?;
        match value.as_str() {
            Some(method) if VALID_INTERP_METHODS.contains(&method) => Ok(()),
            _ => Err(Violation::InvalidInterpMethod(display_value(value))),
        }
    }
}

/// Only looks at this entry's own `fieldname_file`; an absent key is not
/// treated as empty.
pub struct FileInterpRule;

impl EntryRule for FileInterpRule {
    fn id(&self) -> &str {
        "file-interp"
    }

    fn description(&self) -> &str {
        "interpol_method must be empty when fieldname_file is empty"
    }

    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation> {
        if !is_empty_string(entry.get("fieldname_file")) {
            return Ok(());
        }
        match entry.get("interpol_method") {
            Some(method) if !is_empty_string(Some(method)) => {
                Err(Violation::InterpWithoutFile(display_value(method)))
            }
            _ => Ok(()),
        }
    }
}

fn is_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if s.is_empty())
}
