//! Rule: fieldname-code
//!
//! The model-side field name must be given and non-empty.

use serde_yaml::Value;

use crate::{DataTableEntry, EntryRule, Violation};

pub struct FieldnameCodeRule;

impl EntryRule for FieldnameCodeRule {
    fn id(&self) -> &str {
        "fieldname-code"
    }

    fn description(&self) -> &str {
        "fieldname_code is required and must not be empty"
    }

    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation> {
        match entry.get("fieldname_code") {
            None => Err(Violation::MissingKey("fieldname_code")),
            Some(Value::String(s)) if s.is_empty() => Err(Violation::EmptyFieldnameCode),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::entry_from_yaml;

    #[test]
    fn empty_and_missing() {
        assert_eq!(
            FieldnameCodeRule.check(&entry_from_yaml("gridname: OCN")),
            Err(Violation::MissingKey("fieldname_code"))
        );
        let err = FieldnameCodeRule
            .check(&entry_from_yaml("fieldname_code: \"\""))
            .unwrap_err();
        assert_eq!(err, Violation::EmptyFieldnameCode);
        assert_eq!(err.to_string(), "Fieldname can't be empty");
        assert!(FieldnameCodeRule
            .check(&entry_from_yaml("fieldname_code: sst"))
            .is_ok());
    }

    #[test]
    fn numeric_code_is_a_name() {
        assert!(FieldnameCodeRule
            .check(&entry_from_yaml("fieldname_code: 123"))
            .is_ok());
    }
}
