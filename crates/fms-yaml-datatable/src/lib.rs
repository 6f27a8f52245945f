//! data_table YAML validator: ordered schema rules, fail-fast.
//!
//! Provides a trait-based rule framework for checking data_table entries.
//! The first violation found aborts validation of the whole document.

pub mod error;
mod rules;
pub mod types;

pub use error::{DataTableError, Violation};
pub use rules::*;
pub use types::{DataTable, DataTableEntry};

use log::{debug, trace};

// ---------------------------------------------------------------------------
// Entry rule trait
// ---------------------------------------------------------------------------

/// Trait that all entry rules must implement.
pub trait EntryRule: Send + Sync {
    /// Unique rule identifier (e.g., "gridname").
    fn id(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Check one entry.
    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation>;
}

// ---------------------------------------------------------------------------
// Validator engine
// ---------------------------------------------------------------------------

pub struct Validator {
    rules: Vec<Box<dyn EntryRule>>,
}

impl Validator {
    /// Create a validator with all built-in rules.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Get a reference to the registered rules.
    pub fn rules(&self) -> &[Box<dyn EntryRule>] {
        &self.rules
    }

    /// Run every rule against one entry, stopping at the first violation.
    pub fn check_entry(&self, entry: &DataTableEntry) -> Result<(), (&str, Violation)> {
        for rule in &self.rules {
            rule.check(entry).map_err(|v| (rule.id(), v))?;
        }
        Ok(())
    }

    /// Validate every entry of every section in order. Returns the number of
    /// entries checked.
    pub fn validate(&self, table: &DataTable) -> Result<usize, DataTableError> {
        for (section, entries) in &table.sections {
            debug!(section, entries = entries.len(); "validating section");
            for (index, entry) in entries.iter().enumerate() {
                trace!(section, index; "checking entry");
                self.check_entry(entry)
                    .map_err(|(rule, violation)| DataTableError::Entry {
                        section: section.clone(),
                        index,
                        rule: rule.to_string(),
                        violation,
                    })?;
            }
        }
        Ok(table.entry_count())
    }

    /// Parse and validate YAML text.
    pub fn validate_str(&self, content: &str) -> Result<usize, DataTableError> {
        let table = DataTable::from_yaml_str(content)?;
        self.validate(&table)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Return all built-in rules, in the order they run.
fn builtin_rules() -> Vec<Box<dyn EntryRule>> {
    vec![
        Box::new(GridnameRule),
        Box::new(FieldnameCodeRule),
        Box::new(InterpMethodRule),
        Box::new(FileInterpRule),
        Box::new(FactorRule),
        Box::new(RegionRule),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::entry_from_yaml;
    use pretty_assertions::assert_eq;

    const VALID: &str = "gridname: OCN\nfieldname_code: sst\ninterpol_method: none\nfactor: 1.0\n";

    fn valid_entry() -> DataTableEntry {
        entry_from_yaml(VALID)
    }

    #[test]
    fn rule_order() {
        let validator = Validator::default();
        let ids: Vec<&str> = validator.rules().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "gridname",
                "fieldname-code",
                "interp-method",
                "file-interp",
                "factor",
                "region"
            ]
        );
    }

    #[test]
    fn every_rule_is_described() {
        for rule in Validator::new().rules() {
            assert!(!rule.description().is_empty(), "{}", rule.id());
        }
    }

    #[test]
    fn valid_entry_passes() {
        assert!(Validator::new().check_entry(&valid_entry()).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let entry = entry_from_yaml("gridname: SEA\nfieldname_code: sst\ninterpol_method: none\n");
        let validator = Validator::new();
        let (rule, violation) = validator.check_entry(&entry).unwrap_err();
        assert_eq!(rule, "gridname");
        assert_eq!(violation, Violation::InvalidGridname("SEA".into()));
    }

    #[test]
    fn entry_error_names_location() {
        let table = DataTable {
            sections: vec![(
                "data_table".into(),
                vec![
                    valid_entry(),
                    entry_from_yaml("gridname: OCN\nfieldname_code: sst\ninterpol_method: none\n"),
                ],
            )],
        };
        let err = Validator::new().validate(&table).unwrap_err();
        match &err {
            DataTableError::Entry {
                section,
                index,
                rule,
                violation,
            } => {
                assert_eq!(section, "data_table");
                assert_eq!(*index, 1);
                assert_eq!(rule, "factor");
                assert_eq!(violation, &Violation::MissingKey("factor"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "data_table[1]: factor is a required key (rule factor)"
        );
    }

    #[test]
    fn validate_counts_entries() {
        let table = DataTable {
            sections: vec![
                ("a".into(), vec![valid_entry(), valid_entry()]),
                ("b".into(), vec![valid_entry()]),
            ],
        };
        assert_eq!(Validator::new().validate(&table).unwrap(), 3);
    }
}
